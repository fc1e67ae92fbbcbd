use super::*;
use crate::http::Method;
use crate::test_support::{ScriptedTransport, signed_in};

fn beef() -> serde_json::Value {
    serde_json::json!({
        "id": 1, "name": "Beef", "category": "Meat", "unit": "kg",
        "unit_price": 3000, "current_stock": 50, "minimum_stock": 10,
        "supplier": "Yamada Livestock", "last_updated": "2024-06-01T09:00:00"
    })
}

fn input() -> MaterialInput {
    MaterialInput {
        name: "Beef".to_owned(),
        category: "Meat".to_owned(),
        unit: "kg".to_owned(),
        unit_price: 3000.0,
        current_stock: 50.0,
        minimum_stock: 10.0,
        supplier: None,
    }
}

#[test]
fn material_path_formats_expected_path() {
    assert_eq!(material_path(3), "/materials/3");
}

#[tokio::test]
async fn list_materials_passes_query_and_decodes() {
    let h = signed_in(ScriptedTransport::default().respond(200, serde_json::json!([beef()])), "tok");
    let rows = list_materials(&h.client, &ListQuery::new().with("limit", 10)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Beef");
    let sent = h.transport.last();
    assert_eq!((sent.method, sent.path.as_str()), (Method::Get, "/materials"));
    assert_eq!(sent.query, vec![("limit".to_owned(), "10".to_owned())]);
}

#[tokio::test]
async fn list_materials_empty_collection() {
    let h = signed_in(ScriptedTransport::default().respond(200, serde_json::json!([])), "tok");
    assert!(list_materials(&h.client, &ListQuery::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn crud_calls_use_fixed_paths() {
    let h = signed_in(
        ScriptedTransport::default()
            .respond(200, beef())
            .respond(201, beef())
            .respond(200, beef())
            .respond_raw(204, ""),
        "tok",
    );
    get_material(&h.client, 1).await.unwrap();
    create_material(&h.client, &input()).await.unwrap();
    update_material(&h.client, 1, &input()).await.unwrap();
    delete_material(&h.client, 1).await.unwrap();

    let calls: Vec<(Method, String)> = h.transport.recorded().into_iter().map(|r| (r.method, r.path)).collect();
    assert_eq!(
        calls,
        vec![
            (Method::Get, "/materials/1".to_owned()),
            (Method::Post, "/materials".to_owned()),
            (Method::Put, "/materials/1".to_owned()),
            (Method::Delete, "/materials/1".to_owned()),
        ]
    );
}
