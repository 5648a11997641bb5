//! Output helpers shared across commands.

use crate::stats::PlayerView;

/// One-line summary of a player's stats.
pub fn format_player_line(view: &PlayerView<'_>) -> String {
    let stats = view.stats;
    let jersey = view
        .jersey_number
        .map(|n| format!("#{n} "))
        .unwrap_or_default();

    format!(
        "{jersey}{name} [{id}]: {pct:.1}% innings ({active}/{total}), top {top}, bat {bat}, INF {inf:.1}%, OF {of:.1}%",
        name = view.full_name.trim(),
        id = view.id,
        pct = stats.pct_innings_played,
        active = stats.active_innings_played,
        total = stats.total_innings_participated_in,
        top = stats.top_position.as_deref().unwrap_or("-"),
        bat = stats
            .avg_batting_loc
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string()),
        inf = stats.pct_inf_played,
        of = stats.pct_of_played,
    )
}

/// Position counts as `CODE:count` pairs in first-seen order.
pub fn format_position_counts(view: &PlayerView<'_>) -> String {
    view.stats
        .position_counts
        .iter()
        .map(|(code, count)| format!("{code}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}
