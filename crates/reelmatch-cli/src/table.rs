//! Plain-text rendering for terminal output.

use reelmatch_core::{Recommendation, UserProfile};
use std::fmt::Write;

const COLUMNS: [&str; 6] = ["tconst", "primaryTitle", "genres", "runtime", "rating", "score"];

/// Summary block for one user profile.
pub fn render_user(user: &UserProfile) -> String {
    let join = |items: Vec<&str>| items.join(", ");
    let mut out = String::new();
    let _ = writeln!(out, "User: {}", user.id);
    let _ = writeln!(
        out,
        "  Preferred genres: {}",
        join(user.preferred_genres.iter().map(String::as_str).collect())
    );
    let _ = writeln!(out, "  Average watch time: {} min", user.average_watch_time);
    let _ = writeln!(
        out,
        "  Favorite movies: {}",
        join(user.favorite_movies.iter().map(|m| m.as_str()).collect())
    );
    let _ = writeln!(
        out,
        "  Favorite actors: {}",
        join(user.favorite_actors.iter().map(|a| a.as_str()).collect())
    );
    out
}

/// Left-aligned table of recommendations, one row per movie.
///
/// Column widths fit the widest cell, so long titles are never cut.
pub fn render_recommendations(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "(no recommendations)\n".to_string();
    }

    let rows: Vec<[String; 6]> = recommendations
        .iter()
        .map(|rec| {
            [
                rec.tconst.to_string(),
                rec.primary_title.clone(),
                rec.genres.clone(),
                rec.runtime_minutes.to_string(),
                format!("{:.1}", rec.average_rating),
                format!("{:.2}", rec.total_score),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &COLUMNS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
