use super::*;
use crate::http::Method;
use crate::test_support::{ScriptedTransport, signed_in};
use crate::types::RecipeStep;

fn curry() -> serde_json::Value {
    serde_json::json!({ "id": 5, "name": "Beef Curry", "selling_price": 980 })
}

#[test]
fn association_paths_format_expected_paths() {
    assert_eq!(menu_path(5), "/menus/5");
    assert_eq!(menu_materials_path(5), "/menus/5/materials");
    assert_eq!(menu_material_path(5, 2), "/menus/5/materials/2");
    assert_eq!(menu_recipes_path(5), "/menus/5/recipes");
}

#[tokio::test]
async fn list_menus_passes_query() {
    let h = signed_in(ScriptedTransport::default().respond(200, serde_json::json!([curry()])), "tok");
    let menus = list_menus(&h.client, &ListQuery::new().with("limit", 10)).await.unwrap();
    assert_eq!(menus[0].selling_price, 980.0);
    assert_eq!(h.transport.last().query, vec![("limit".to_owned(), "10".to_owned())]);
}

#[tokio::test]
async fn menu_crud_uses_fixed_paths() {
    let h = signed_in(
        ScriptedTransport::default()
            .respond(200, curry())
            .respond(201, curry())
            .respond(200, curry())
            .respond_raw(204, ""),
        "tok",
    );
    let input = MenuInput { name: "Beef Curry".to_owned(), selling_price: 980.0, description: None, category: None };
    get_menu(&h.client, 5).await.unwrap();
    create_menu(&h.client, &input).await.unwrap();
    update_menu(&h.client, 5, &input).await.unwrap();
    delete_menu(&h.client, 5).await.unwrap();

    let calls: Vec<(Method, String)> = h.transport.recorded().into_iter().map(|r| (r.method, r.path)).collect();
    assert_eq!(
        calls,
        vec![
            (Method::Get, "/menus/5".to_owned()),
            (Method::Post, "/menus".to_owned()),
            (Method::Put, "/menus/5".to_owned()),
            (Method::Delete, "/menus/5".to_owned()),
        ]
    );
}

#[tokio::test]
async fn associations_discard_response_bodies() {
    let h = signed_in(
        ScriptedTransport::default()
            .respond_raw(201, "created")
            .respond_raw(204, "")
            .respond_raw(201, ""),
        "tok",
    );
    add_menu_material(&h.client, 5, &MenuMaterialInput { material_id: 2, quantity: 0.25 }).await.unwrap();
    remove_menu_material(&h.client, 5, 2).await.unwrap();
    add_recipe_step(&h.client, 5, &RecipeStep { step_number: 1, description: "Brown the beef".to_owned() })
        .await
        .unwrap();

    let sent = h.transport.recorded();
    assert_eq!((sent[0].method, sent[0].path.as_str()), (Method::Post, "/menus/5/materials"));
    assert_eq!(sent[0].body.as_deref(), Some(r#"{"material_id":2,"quantity":0.25}"#));
    assert_eq!((sent[1].method, sent[1].path.as_str()), (Method::Delete, "/menus/5/materials/2"));
    assert_eq!((sent[2].method, sent[2].path.as_str()), (Method::Post, "/menus/5/recipes"));
}
