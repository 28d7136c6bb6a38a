//! Fixed-column text rendering of ranked aggregates

use super::aggregator::PlayerWeeklyAggregate;
use super::record::Player;

const STATS_HEADER: [&str; 5] = ["NAME", "MATCHES", "W-L", "KD", "HS%"];

/// Render ranked aggregates as an aligned five-column table.
///
/// KD is formatted to 2 decimal places, HS% to 1, W-L as `wins-losses`.
/// Zero-match players render as a full zero row. The result is a single
/// text block meant for verbatim display inside a fixed-width container.
pub fn render_table(ranked: &[&PlayerWeeklyAggregate]) -> String {
    let rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|a| {
            vec![
                a.nickname.clone(),
                a.matches.to_string(),
                format!("{}-{}", a.wins, a.losses),
                format!("{:.2}", a.kd_ratio),
                format!("{:.1}", a.hs_pct),
            ]
        })
        .collect();
    render_columns(&STATS_HEADER, &rows)
}

/// Render a roster listing as a two-column NAME / ID table.
pub fn render_roster_table(players: &[Player]) -> String {
    let rows: Vec<Vec<String>> = players
        .iter()
        .map(|p| vec![p.nickname.clone(), p.player_id.clone()])
        .collect();
    render_columns(&["NAME", "ID"], &rows)
}

/// Pad every column to the width of its widest cell, two spaces between
/// columns, trailing whitespace trimmed per line.
fn render_columns(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    render_row(&mut out, header.iter().map(|h| *h), &widths);
    for row in rows {
        render_row(&mut out, row.iter().map(|c| c.as_str()), &widths);
    }
    out
}

fn render_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell, width = widths[i]));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(nickname: &str, matches: u32, wins: u32, losses: u32, kd: f64, hs: f64) -> PlayerWeeklyAggregate {
        PlayerWeeklyAggregate {
            player_id: nickname.to_string(),
            nickname: nickname.to_string(),
            team: String::new(),
            matches,
            wins,
            losses,
            kd_ratio: kd,
            hs_pct: hs,
        }
    }

    #[test]
    fn test_render_formats_and_alignment() {
        let active = aggregate("longnickname", 12, 7, 5, 14.0 / 13.0, (4.0 / 14.0) * 100.0);
        let table = render_table(&[&active]);

        let mut lines = table.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();
        assert!(header.starts_with("NAME"));
        assert!(row.starts_with("longnickname"));
        assert!(row.contains("7-5"));
        assert!(row.contains("1.08"));
        assert!(row.contains("28.6"));
        // MATCHES starts at the same column in both lines
        assert_eq!(header.find("MATCHES"), Some("longnickname  ".len()));
    }

    #[test]
    fn test_zero_match_player_renders_zero_row() {
        let idle = aggregate("idle", 0, 0, 0, 0.0, 0.0);
        let table = render_table(&[&idle]);

        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("idle"));
        assert!(row.contains("0-0"));
        assert!(row.contains("0.00"));
        assert!(row.contains("0.0"));
    }

    #[test]
    fn test_roster_table() {
        let players = vec![
            Player { nickname: "a".to_string(), player_id: "id-a".to_string() },
            Player { nickname: "b".to_string(), player_id: "id-b".to_string() },
        ];
        let table = render_roster_table(&players);
        assert!(table.starts_with("NAME"));
        assert!(table.contains("id-a"));
        assert_eq!(table.lines().count(), 3);
    }
}
