use ::scraper::node::Node;
use ::scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::model::RawTable;
use crate::scraper::cell_text;

/// Column whose empty cells mark non-data rows.
const PRIMARY_COLUMN: &str = "Player";

/// Text of the primary cell in header rows repeated through long tables.
pub const REPEATED_HEADER_MARKER: &str = "Player";

/// Locate the first table matching `selector` and convert it into a [`RawTable`].
///
/// Rows whose primary cell is empty or a repeated header are dropped.
pub fn extract_table(document: &Html, selector: &str) -> Result<RawTable> {
    with_table(document, selector, parse_table)
}

/// Run `f` on the first table matching `selector`.
///
/// The site ships some tables inside HTML comments, so when nothing matches in
/// the live document the commented markup is searched as well.
pub fn with_table<T>(
    document: &Html,
    selector: &str,
    f: impl FnOnce(ElementRef) -> Result<T>,
) -> Result<T> {
    let table_selector = Selector::parse(selector)?;

    if let Some(table) = document.select(&table_selector).next() {
        return f(table);
    }

    for node in document.tree.root().descendants() {
        let Node::Comment(comment) = node.value() else {
            continue;
        };
        if !comment.contains("<table") {
            continue;
        }
        let fragment = Html::parse_fragment(comment);
        if let Some(table) = fragment.select(&table_selector).next() {
            debug!(selector, "found table inside comment");
            return f(table);
        }
    }

    Err(ScrapeError::TableNotFound {
        selector: selector.to_owned(),
    })
}

fn parse_table(table: ElementRef) -> Result<RawTable> {
    let header_row_selector = Selector::parse("thead tr")?;
    let body_row_selector = Selector::parse("tbody tr")?;
    let any_row_selector = Selector::parse("tr")?;
    let cell_selector = Selector::parse("th, td")?;

    // Grouping rows ("over headers") come first; the last header row names the columns.
    let header_row = table.select(&header_row_selector).last();
    let (headers, body_rows): (Vec<String>, Vec<ElementRef>) = match header_row {
        Some(row) => (
            row.select(&cell_selector).map(|c| cell_text(&c)).collect(),
            table.select(&body_row_selector).collect(),
        ),
        None => {
            let mut rows = table.select(&any_row_selector);
            let headers = rows
                .next()
                .map(|row| row.select(&cell_selector).map(|c| cell_text(&c)).collect())
                .unwrap_or_default();
            (headers, rows.collect())
        }
    };

    let primary = headers.iter().position(|h| h == PRIMARY_COLUMN);
    let width = headers.len();

    let rows: Vec<Vec<String>> = body_rows
        .into_iter()
        .map(|row| {
            let mut cells: Vec<String> =
                row.select(&cell_selector).map(|c| cell_text(&c)).collect();
            cells.resize(width, String::new());
            cells
        })
        .filter(|cells| is_data_row(cells, primary))
        .collect();

    debug!(columns = width, rows = rows.len(), "extracted table");

    Ok(RawTable { headers, rows })
}

fn is_data_row(cells: &[String], primary: Option<usize>) -> bool {
    match primary.and_then(|idx| cells.get(idx)) {
        Some(value) => !value.is_empty() && value != REPEATED_HEADER_MARKER,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PER_GAME: &str = r#"
        <html><body>
        <table id="per_game_stats" class="stats_table">
          <thead>
            <tr><th>Rk</th><th>Player</th><th>Age</th><th>Tm</th><th>Pos</th><th>G</th><th>PTS</th></tr>
          </thead>
          <tbody>
            <tr><th>1</th><td><a href="/players/a">Player A</a></td><td>25</td><td>BOS</td><td>SF</td><td>70</td><td>26.9</td></tr>
            <tr class="thead"><th>Rk</th><th>Player</th><th>Age</th><th>Tm</th><th>Pos</th><th>G</th><th>PTS</th></tr>
            <tr><th>2</th><td>Player B</td><td>31</td><td>DEN</td><td>C</td><td>79</td><td>29.6</td></tr>
            <tr class="spacer"><td></td></tr>
          </tbody>
          <tfoot><tr><td></td><td>League Average</td></tr></tfoot>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extract_table_by_id() {
        let document = Html::parse_document(PER_GAME);
        let table = extract_table(&document, "table#per_game_stats").unwrap();

        assert_eq!(
            table.headers,
            vec!["Rk", "Player", "Age", "Tm", "Pos", "G", "PTS"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "Player"), Some("Player A"));
        assert_eq!(table.cell(1, "Tm"), Some("DEN"));
        assert_eq!(table.cell(1, "PTS"), Some("29.6"));
    }

    #[test]
    fn test_extract_table_by_class() {
        let document = Html::parse_document(PER_GAME);
        let table = extract_table(&document, "table.stats_table").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_no_row_is_empty_or_repeated_header() {
        let document = Html::parse_document(PER_GAME);
        let table = extract_table(&document, "table#per_game_stats").unwrap();
        for row in 0..table.len() {
            let player = table.cell(row, PRIMARY_COLUMN).unwrap();
            assert!(!player.is_empty());
            assert_ne!(player, REPEATED_HEADER_MARKER);
        }
    }

    #[test]
    fn test_missing_table() {
        let document = Html::parse_document(PER_GAME);
        let err = extract_table(&document, "table#advanced").unwrap_err();
        assert!(matches!(err, ScrapeError::TableNotFound { selector } if selector == "table#advanced"));
    }

    #[test]
    fn test_invalid_selector() {
        let document = Html::parse_document(PER_GAME);
        let err = extract_table(&document, "table[").unwrap_err();
        assert!(matches!(err, ScrapeError::Selector(_)));
    }

    #[test]
    fn test_last_header_row_names_columns() {
        let html = r#"
            <table id="advanced">
              <thead>
                <tr class="over_header"><th colspan="3"></th><th colspan="2">Win Shares</th></tr>
                <tr><th>Rk</th><th>Player</th><th>PER</th><th>WS</th><th>WS/48</th></tr>
              </thead>
              <tbody>
                <tr><th>1</th><td>Player A</td><td>31.2</td><td>16.4</td><td>.301</td></tr>
              </tbody>
            </table>
        "#;
        let document = Html::parse_document(html);
        let table = extract_table(&document, "table#advanced").unwrap();
        assert_eq!(table.headers, vec!["Rk", "Player", "PER", "WS", "WS/48"]);
        assert_eq!(table.cell(0, "WS/48"), Some(".301"));
    }

    #[test]
    fn test_table_inside_comment() {
        let html = r#"
            <html><body>
            <div id="all_roy">
            <!--
              <table id="roy"><thead><tr><th>Rank</th><th>Player</th></tr></thead>
              <tbody><tr><th>1</th><td data-stat="player">Rookie R</td></tr></tbody></table>
            -->
            </div>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let table = extract_table(&document, "table#roy").unwrap();
        assert_eq!(table.cell(0, "Player"), Some("Rookie R"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let html = r#"
            <table id="t"><thead><tr><th>Player</th><th>PTS</th><th>AST</th></tr></thead>
            <tbody><tr><td>Player A</td><td>10.0</td></tr></tbody></table>
        "#;
        let document = Html::parse_document(html);
        let table = extract_table(&document, "table#t").unwrap();
        assert_eq!(table.rows[0], vec!["Player A", "10.0", ""]);
    }

    #[test]
    fn test_table_without_primary_column_has_no_rows() {
        let html = r#"
            <table id="t"><thead><tr><th>Name</th><th>PTS</th></tr></thead>
            <tbody><tr><td>Player A</td><td>10.0</td></tr></tbody></table>
        "#;
        let document = Html::parse_document(html);
        let table = extract_table(&document, "table#t").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers, vec!["Name", "PTS"]);
    }
}
