use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Hex secret of the admin used against the fixture node.
pub const ADMIN_KEY_HEX: &str = "0x0505050505050505050505050505050505050505050505050505050505050505";

pub fn owned(id: &str, type_tag: &str) -> Value {
    json!({
        "data": {
            "objectId": id,
            "version": "42",
            "digest": "11111111111111111111111111111111",
            "type": type_tag,
            "content": { "dataType": "moveObject", "fields": { "id": { "id": id } } }
        }
    })
}

/// Serves owned-object pages, chained by cursor. The last page has no successor.
pub async fn mount_pages(server: &MockServer, pages: Vec<Vec<Value>>) {
    let count = pages.len();
    for (idx, data) in pages.into_iter().enumerate() {
        let cursor = if idx == 0 {
            Value::Null
        } else {
            json!(format!("cursor-{idx}"))
        };
        let has_next = idx + 1 < count;
        let next_cursor = if has_next {
            json!(format!("cursor-{}", idx + 1))
        } else {
            Value::Null
        };

        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "method": "suix_getOwnedObjects" })))
            .and(move |request: &Request| {
                serde_json::from_slice::<Value>(&request.body)
                    .map(|body| body["params"][2] == cursor)
                    .unwrap_or(false)
            })
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "data": data, "nextCursor": next_cursor, "hasNextPage": has_next }
            })))
            .mount(server)
            .await;
    }
}
