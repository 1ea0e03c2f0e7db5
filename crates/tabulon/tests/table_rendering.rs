//! Integration tests for the boxed and Markdown table renderers.

use tabulon::{render_table, Appearance, Record, RenderOptions};

#[derive(Record)]
struct Crew {
    #[record(rename = "Id")]
    id: i64,
    #[record(rename = "Name")]
    name: String,
}

fn crew() -> Vec<Crew> {
    [
        (1, "Fry"),
        (2, "Farnsworth"),
        (3, "Zoidberg"),
        (4, "Rodriguez"),
    ]
    .into_iter()
    .map(|(id, name)| Crew {
        id,
        name: name.to_string(),
    })
    .collect()
}

#[test]
fn boxed_table_with_defaults() {
    let table = render_table(&crew(), &RenderOptions::new()).unwrap();
    let expected = "\
+----+------------+
| Id | Name       |
+----+------------+
| 1  | Fry        |
| 2  | Farnsworth |
| 3  | Zoidberg   |
| 4  | Rodriguez  |
+----+------------+
";
    assert_eq!(table, expected);
}

#[test]
fn top_and_bottom_borders_are_identical() {
    let table = render_table(&crew(), &RenderOptions::new()).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.first(), lines.last());
    assert!(lines[0].starts_with('+'));
    assert!(lines[0].ends_with('+'));
}

#[test]
fn markdown_table_has_no_outer_borders() {
    let table = render_table(&crew(), &RenderOptions::markdown()).unwrap();
    let expected = "\
| Id | Name       |
|:---|:-----------|
| 1  | Fry        |
| 2  | Farnsworth |
| 3  | Zoidberg   |
| 4  | Rodriguez  |
";
    assert_eq!(table, expected);
}

#[test]
fn markdown_alignment_separators() {
    let options = RenderOptions::markdown().overrides([
        tabulon::OverrideEntry::new("id", Appearance::new().rename("Id").right()),
        tabulon::OverrideEntry::new("name", Appearance::new().rename("Name").center()),
    ]);
    let table = render_table(&crew(), &options).unwrap();
    let separator = table.lines().nth(1).unwrap();
    assert_eq!(separator, "|---:|:----------:|");
}

#[test]
fn row_numbers_add_a_leading_column() {
    let table = render_table(&crew(), &RenderOptions::new().row_numbers()).unwrap();
    let expected = "\
+-----+----+------------+
| Row | Id | Name       |
+-----+----+------------+
|   1 | 1  | Fry        |
|   2 | 2  | Farnsworth |
|   3 | 3  | Zoidberg   |
|   4 | 4  | Rodriguez  |
+-----+----+------------+
";
    assert_eq!(table, expected);
}

#[test]
fn right_alignment_pads_on_the_left() {
    let options =
        RenderOptions::new().override_field("id", Appearance::new().rename("Id").right());
    let table = render_table(&crew(), &options).unwrap();
    assert!(table.contains("|  1 | Fry        |"));
    // Header cells stay left-aligned regardless of column alignment.
    assert!(table.contains("| Id | Name       |"));
}

#[test]
fn center_data_cells_pad_like_right() {
    let right = RenderOptions::new().override_field("id", Appearance::new().right());
    let center = RenderOptions::new().override_field("id", Appearance::new().center());
    let right_table = render_table(&crew(), &right).unwrap();
    let center_table = render_table(&crew(), &center).unwrap();
    assert_eq!(right_table, center_table);
}

#[test]
fn override_renames_column_at_call_time() {
    let options =
        RenderOptions::new().override_field("name", Appearance::new().rename("Crew member"));
    let table = render_table(&crew(), &options).unwrap();
    assert!(table.contains("| Crew member |"));
    // The override replaces the declared appearance, so the declared
    // rename is gone too.
    assert!(!table.contains("| Name"));
}

#[test]
fn override_ignore_drops_column() {
    let options = RenderOptions::new().override_field("id", Appearance::new().ignore());
    let table = render_table(&crew(), &options).unwrap();
    assert!(!table.contains("Id"));
    assert!(table.contains("Name"));
}

#[test]
fn empty_collection_renders_header_only() {
    let records: Vec<Crew> = Vec::new();
    let table = render_table(&records, &RenderOptions::new()).unwrap();
    let expected = "\
+----+------+
| Id | Name |
+----+------+
+----+------+
";
    assert_eq!(table, expected);
}

#[test]
fn repeated_rendering_is_byte_identical() {
    let records = crew();
    for options in [
        RenderOptions::new(),
        RenderOptions::markdown(),
        RenderOptions::new().row_numbers(),
    ] {
        let first = render_table(&records, &options).unwrap();
        let second = render_table(&records, &options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn ten_plus_rows_widen_the_row_column() {
    let records: Vec<Crew> = (1..=120)
        .map(|id| Crew {
            id,
            name: format!("crew-{id}"),
        })
        .collect();
    let table = render_table(&records, &RenderOptions::new().row_numbers()).unwrap();
    // 121 potential ids need 3 digits, which matches the "Row" header width.
    assert!(table.contains("| Row |"));
    assert!(table.contains("| 120 |"));
}
