//! End-to-end tests for `#[derive(Record)]`.

use chrono::NaiveDate;
use tabulon::{
    render_key_value_list, render_table, Appearance, ListOptions, Record, RenderOptions,
    TextAlign, Value,
};

#[derive(Record)]
struct Employee {
    #[record(rename = "Id", align = "right")]
    id: i64,

    #[record(rename = "Name")]
    name: String,

    #[record(rename = "Date of birth", format = "yyyy-MM-dd", order = 10)]
    birthday: NaiveDate,

    #[record(ignore)]
    api_token: String,

    #[record(encapsulate)]
    department: String,

    mail: Option<String>,
}

fn staff() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Fry".to_string(),
            birthday: NaiveDate::from_ymd_opt(1974, 8, 14).unwrap(),
            api_token: "secret".to_string(),
            department: "Delivery".to_string(),
            mail: Some("fry@planet.express".to_string()),
        },
        Employee {
            id: 2,
            name: "Leela".to_string(),
            birthday: NaiveDate::from_ymd_opt(1975, 7, 29).unwrap(),
            api_token: "hidden".to_string(),
            department: "Command".to_string(),
            mail: None,
        },
    ]
}

#[test]
fn schema_reflects_attributes() {
    let schema = Employee::schema();
    assert_eq!(schema.len(), 6);

    assert_eq!(schema[0].name, "id");
    assert_eq!(schema[0].display_name(), "Id");
    assert_eq!(schema[0].appearance.align, TextAlign::Right);

    assert_eq!(schema[2].display_name(), "Date of birth");
    assert_eq!(schema[2].appearance.format.as_deref(), Some("yyyy-MM-dd"));
    assert_eq!(schema[2].appearance.order, 10);

    assert!(schema[3].appearance.ignore);
    assert!(schema[4].appearance.encapsulate);

    // Unannotated fields get the default appearance.
    assert_eq!(schema[5].appearance, Appearance::default());
}

#[test]
fn values_convert_through_to_value() {
    let employee = &staff()[0];
    assert_eq!(employee.value("id"), Value::Int(1));
    assert_eq!(employee.value("name"), Value::Text("Fry".to_string()));
    assert_eq!(
        employee.value("birthday"),
        Value::Date(NaiveDate::from_ymd_opt(1974, 8, 14).unwrap())
    );
    assert_eq!(
        employee.value("mail"),
        Value::Text("fry@planet.express".to_string())
    );
    assert_eq!(employee.value("unknown"), Value::Null);
}

#[test]
fn optional_none_renders_empty() {
    assert_eq!(staff()[1].value("mail"), Value::Null);

    let csv = render_table(&staff(), &RenderOptions::csv()).unwrap();
    let leela = csv.lines().find(|line| line.contains("Leela")).unwrap();
    assert_eq!(leela, "2;Leela;\"Command\";;1975-07-29");
}

#[test]
fn ignored_field_never_appears() {
    let table = render_table(&staff(), &RenderOptions::new()).unwrap();
    assert!(!table.contains("api_token"));
    assert!(!table.contains("secret"));

    let csv = render_table(&staff(), &RenderOptions::csv()).unwrap();
    assert!(!csv.contains("api_token"));

    let list = render_key_value_list(&staff()[0], &ListOptions::new()).unwrap();
    assert!(!list.contains("api_token"));
}

#[test]
fn explicit_order_moves_field_to_the_end() {
    let csv = render_table(&staff(), &RenderOptions::csv()).unwrap();
    let header = csv.lines().next().unwrap();
    // birthday has order 10; every sentinel-ordered field keeps its
    // declaration position ahead of it.
    assert_eq!(header, "Id;Name;department;mail;Date of birth");
}

#[test]
fn format_template_applies() {
    let csv = render_table(&staff(), &RenderOptions::csv()).unwrap();
    assert!(csv.contains("1974-08-14"));
}

#[test]
fn encapsulate_attribute_quotes_csv_cell() {
    let csv = render_table(&staff(), &RenderOptions::csv()).unwrap();
    assert!(csv.contains("\"Delivery\""));
}

#[test]
fn derive_works_with_generics() {
    #[derive(Record)]
    struct Labeled<T: tabulon::ToValue> {
        label: String,
        payload: T,
    }

    let labeled = Labeled {
        label: "count".to_string(),
        payload: 3i64,
    };
    assert_eq!(labeled.value("payload"), Value::Int(3));
    assert_eq!(Labeled::<i64>::schema().len(), 2);
}
