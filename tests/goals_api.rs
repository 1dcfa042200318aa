#[macro_use]
mod common;

use actix_web::test;
use common::MemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;

#[actix_web::test]
async fn test_goal_for_unknown_employee_persists_nothing() {
    let store = Arc::new(MemoryStore::default());
    let app = init_app!(store.clone());

    let resp = test::TestRequest::post()
        .uri("/api/goals")
        .set_json(json!({"employee_id": 12, "title": "Ship v1"}))
        .send_request(&app)
        .await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Employee not found");

    let resp = test::TestRequest::get().uri("/api/goals").send_request(&app).await;
    let goals: Value = test::read_body_json(resp).await;
    assert_eq!(goals, json!([]));
    assert_eq!(store.counts(), (0, 0, 0));
}

#[actix_web::test]
async fn test_goal_detail_inlines_owner_and_own_reviews() {
    let app = init_app!(Arc::new(MemoryStore::default()));

    let resp = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({"full_name": "Ann Lee", "position": "Engineer", "hire_date": "2022-01-10"}))
        .send_request(&app)
        .await;
    let employee: Value = test::read_body_json(resp).await;
    let employee_id = employee["id"].clone();

    let mut goal_ids = Vec::new();
    for (title, due) in [("Ship v1", Value::Null), ("Mentor", json!("2024-12-31"))] {
        let resp = test::TestRequest::post()
            .uri("/api/goals")
            .set_json(json!({"employee_id": employee_id, "title": title, "due_date": due}))
            .send_request(&app)
            .await;
        assert_eq!(resp.status(), 201);
        let goal: Value = test::read_body_json(resp).await;
        assert_eq!(goal["employee_id"], employee_id);
        assert_eq!(goal["description"], Value::Null);
        goal_ids.push(goal["id"].as_i64().unwrap());
    }

    // One review per goal plus one without a goal.
    for goal_id in [json!(goal_ids[0]), json!(goal_ids[1]), Value::Null] {
        let resp = test::TestRequest::post()
            .uri("/api/reviews")
            .set_json(json!({"employee_id": employee_id, "goal_id": goal_id, "score": 3}))
            .send_request(&app)
            .await;
        assert_eq!(resp.status(), 201);
    }

    let resp = test::TestRequest::get()
        .uri(&format!("/api/goals/{}", goal_ids[0]))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 200);
    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["title"], "Ship v1");
    assert_eq!(detail["employee_full_name"], "Ann Lee");
    assert_eq!(detail["employee_position"], "Engineer");
    let reviews = detail["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["goal_id"], goal_ids[0]);

    let resp = test::TestRequest::get()
        .uri(&format!("/api/employees/{}", employee_id))
        .send_request(&app)
        .await;
    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["goals"].as_array().unwrap().len(), 2);
    assert_eq!(detail["reviews"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_unknown_goal_is_404() {
    let app = init_app!(Arc::new(MemoryStore::default()));

    let resp = test::TestRequest::get().uri("/api/goals/5").send_request(&app).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Goal not found");
}

#[actix_web::test]
async fn test_missing_title_is_422() {
    let app = init_app!(Arc::new(MemoryStore::default()));

    let resp = test::TestRequest::post()
        .uri("/api/goals")
        .set_json(json!({"employee_id": 1}))
        .send_request(&app)
        .await;

    assert_eq!(resp.status(), 422);
}
