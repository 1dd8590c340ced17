mod common;

use common::TestApp;
use serde_json::json;
use verita_client::models::{
    OrganizationInvite, ProjectListParams, ProjectStatus, QuestionCreate, QuestionType, TaskCreate,
    TaskListParams, TaskStatus, TeamRole,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_projects_encodes_query_parameters() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .and(query_param("skip", "10"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "p1", "name": "One", "status": "active" },
            { "id": "p2", "name": "Two", "status": "active" }
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let params = ProjectListParams {
        skip: Some(10),
        limit: None,
        status: Some(ProjectStatus::Active),
    };
    let projects = app.client.get_projects(&params).await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].id, "p2");

    let received = app.requests_to("/api/v1/projects").await;
    assert_eq!(received[0].url.query(), Some("skip=10&status=active"));
}

#[tokio::test]
async fn test_task_list_filters_by_status() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/p1/tasks"))
        .and(query_param("status", "needs_review"))
        .and(query_param("batch_id", "b-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "t1", "project_id": "p1", "status": "needs_review", "data": { "text": "hi" } }
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let params = TaskListParams {
        status: Some(TaskStatus::NeedsReview),
        batch_id: Some("b-7".to_string()),
        ..Default::default()
    };
    let tasks = app.client.get_tasks("p1", &params).await.unwrap();
    assert_eq!(tasks[0].status, TaskStatus::NeedsReview);
    assert_eq!(tasks[0].data["text"], "hi");
}

#[tokio::test]
async fn test_bulk_tasks_are_wrapped_in_tasks_field() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/projects/p1/tasks/bulk"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "tasks": [
                { "data": { "text": "a" } },
                { "data": { "text": "b" }, "external_id": "ext-2" }
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            { "id": "t1", "project_id": "p1" },
            { "id": "t2", "project_id": "p1", "external_id": "ext-2" }
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut second = TaskCreate::new(json!({ "text": "b" }));
    second.external_id = Some("ext-2".to_string());
    let tasks = [TaskCreate::new(json!({ "text": "a" })), second];

    let created = app.client.create_tasks_bulk("p1", &tasks).await.unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[1].external_id.as_deref(), Some("ext-2"));
}

#[tokio::test]
async fn test_delete_with_empty_body_returns_none() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/projects/p1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/tasks/t1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Task deleted" })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    assert!(app.client.delete_project("p1").await.unwrap().is_none());
    let deleted = app.client.delete_task("t1").await.unwrap().unwrap();
    assert_eq!(deleted.message, "Task deleted");
}

#[tokio::test]
async fn test_launch_project_posts_action() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/projects/p1/launch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Project launched",
            "project": { "id": "p1", "status": "active" }
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let response = app.client.launch_project("p1").await.unwrap();
    assert!(response.success);
    assert_eq!(response.project.status, ProjectStatus::Active);
}

#[tokio::test]
async fn test_add_question_sends_definition() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/projects/p1/questions"))
        .and(body_json(json!({
            "question_type": "free_response",
            "order": 1,
            "identifier": "summary",
            "label": "Summarize the text",
            "required": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "q1",
            "project_id": "p1",
            "question_type": "free_response",
            "order": 1,
            "identifier": "summary",
            "label": "Summarize the text",
            "required": true
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let question =
        QuestionCreate::new(QuestionType::FreeResponse, 1, "summary", "Summarize the text");
    let created = app.client.add_question("p1", &question).await.unwrap();
    assert_eq!(created.id, "q1");
    assert_eq!(created.question_type, QuestionType::FreeResponse);
}

#[tokio::test]
async fn test_update_team_member_sends_role_only() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/team-1/members/m-1"))
        .and(body_json(json!({ "role": "admin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m-1",
            "user_id": "u1",
            "team_id": "team-1",
            "role": "admin"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let member = app
        .client
        .update_team_member("team-1", "m-1", TeamRole::Admin)
        .await
        .unwrap();
    assert_eq!(member.role, TeamRole::Admin);
}

#[tokio::test]
async fn test_organization_routes() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "o1",
            "name": "Acme",
            "slug": "acme",
            "subscription_tier": "pro"
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/organizations/invite"))
        .and(body_json(json!({
            "email": "w@b.com",
            "team_id": "team-1",
            "role": "member"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Invitation sent",
            "invited_email": "w@b.com"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let organization = app.client.get_current_organization().await.unwrap();
    assert_eq!(organization.slug, "acme");

    let invite = OrganizationInvite {
        email: "w@b.com".to_string(),
        team_id: "team-1".to_string(),
        role: "member".to_string(),
    };
    let response = app.client.invite_user_to_organization(&invite).await.unwrap();
    assert_eq!(response.invited_email, "w@b.com");
}

#[tokio::test]
async fn test_undecodable_success_body_is_decode_error() {
    let app = TestApp::spawn_with_tokens("tok", "ref").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&app.server)
        .await;

    let err = app.client.get_task("t1").await.unwrap_err();
    assert!(matches!(err, verita_client::ApiError::Decode(_)));
}
