use crate::common::{create_test_client, create_test_config, read_log, temp_log_path, write_temp_photo};
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use petfriends_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_authenticate_sends_credentials_as_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/key")
        .match_header("email", "tester@example.com")
        .match_header("password", "secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729"}"#)
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let response = client
        .authenticate("tester@example.com", "secret")
        .await
        .expect("request failed");

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.method, Method::GET);
    assert!(response.body.contains_key("key"));

    let key = AuthKey::from_response(&response).expect("key missing");
    assert_eq!(
        key.as_str(),
        "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729"
    );
}

#[tokio::test]
async fn test_authenticate_with_uses_configured_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/key")
        .match_header("email", "tester@example.com")
        .match_header("password", "secret")
        .with_status(200)
        .with_body(r#"{"key": "abc"}"#)
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let credentials = client.config().credentials.clone();
    let response = client.authenticate_with(&credentials).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_authenticate_forbidden_html_is_kept_raw() {
    let mut server = Server::new_async().await;
    let body = "<!doctype html><title>403 Forbidden</title><p>This user wasn't found in database</p>";
    let _mock = server
        .mock("GET", "/api/key")
        .with_status(403)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let response = client.authenticate("nobody@example.com", "wrong").await.unwrap();

    assert_eq!(response.status, 403);
    assert_eq!(response.body, ResponseBody::Raw(body.to_string()));
    assert!(AuthKey::from_response(&response).is_none());
}

#[tokio::test]
async fn test_list_pets_sends_key_and_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/pets")
        .match_header("auth_key", "abc")
        .match_query(Matcher::UrlEncoded("filter".into(), "my_pets".into()))
        .with_status(200)
        .with_body(r#"{"pets": [{"id": "p1", "name": "Barsik", "animal_type": "cat", "age": "3"}]}"#)
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let response = client
        .list_pets(&AuthKey::new("abc"), &PetFilter::MyPets)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    let list: PetList = response.body.decode().unwrap();
    assert_eq!(list.ids(), vec!["p1"]);
}

#[tokio::test]
async fn test_list_pets_all_sends_empty_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/pets")
        .match_query(Matcher::UrlEncoded("filter".into(), "".into()))
        .with_status(200)
        .with_body(r#"{"pets": []}"#)
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let response = client
        .list_pets(&AuthKey::new("abc"), &PetFilter::All)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_json_eq!(response.body.as_json().unwrap(), json!({"pets": []}));
}

#[tokio::test]
async fn test_list_pets_forwards_unknown_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/pets")
        .match_query(Matcher::UrlEncoded("filter".into(), "someone_else".into()))
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let response = client
        .list_pets(&AuthKey::new("abc"), &PetFilter::from("someone_else"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 500);
    assert_eq!(response.body.as_raw(), Some("Internal Server Error"));
}

#[tokio::test]
async fn test_create_pet_sends_multipart_with_photo() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/pets")
        .match_header("auth_key", "abc")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="name""#.into()),
            Matcher::Regex("Barsik".into()),
            Matcher::Regex(r#"name="animal_type""#.into()),
            Matcher::Regex(r#"name="age""#.into()),
            Matcher::Regex(r#"name="pet_photo"; filename="petfriends-photo-\w+\.jpg""#.into()),
            Matcher::Regex("(?i)content-type: image/jpeg".into()),
            Matcher::Regex("fake-jpeg-bytes".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id": "p42", "name": "Barsik", "animal_type": "cat", "age": "3"}"#)
        .create_async()
        .await;

    let photo = write_temp_photo("jpg", b"fake-jpeg-bytes");
    let (client, _log) = create_test_client(&server.url());
    let pet = NewPet::new("Barsik", "cat", 3);
    let response = client
        .create_pet(&AuthKey::new("abc"), &pet, &photo)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.method, Method::POST);
    assert_eq!(response.status, 200);
    assert_eq!(response.body.get("name"), Some(&json!("Barsik")));
}

#[tokio::test]
async fn test_create_pet_png_photo_uses_png_mime() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/pets")
        .match_body(Matcher::Regex("(?i)content-type: image/png".into()))
        .with_status(200)
        .with_body(r#"{"name": "Rex"}"#)
        .create_async()
        .await;

    let photo = write_temp_photo("png", b"fake-png-bytes");
    let (client, _log) = create_test_client(&server.url());
    let response = client
        .create_pet(&AuthKey::new("abc"), &NewPet::new("Rex", "dog", "4"), &photo)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_create_pet_missing_photo_is_io_error_and_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/pets")
        .expect(0)
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let missing = std::env::temp_dir().join(format!("missing-{}.jpg", get_id()));
    let result = client
        .create_pet(&AuthKey::new("abc"), &NewPet::new("Ghost", "cat", 1), &missing)
        .await;

    mock.assert_async().await;
    match result {
        Err(AppError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_pet_with_foreign_key_returns_forbidden() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/pets")
        .match_header("auth_key", "qwe83")
        .with_status(403)
        .with_body("<p>Please provide 'auth_key' Header</p>")
        .create_async()
        .await;

    let photo = write_temp_photo("jpg", b"fake-jpeg-bytes");
    let (client, _log) = create_test_client(&server.url());
    let response = client
        .create_pet(&AuthKey::new("qwe83"), &NewPet::new("Zherar", "Sobaken", 5), &photo)
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(!response.body.is_structured());
    assert!(matches!(
        response.ensure_success(),
        Err(AppError::Unexpected(status)) if status.as_u16() == 403
    ));
}

#[tokio::test]
async fn test_create_pet_without_photo_sends_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/create_pet_simple")
        .match_header("auth_key", "abc")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("name=Tommy&animal_type=kit&age=3")
        .with_status(200)
        .with_body(r#"{"id": "p7", "name": "Tommy", "animal_type": "kit", "age": "3", "pet_photo": ""}"#)
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let response = client
        .create_pet_without_photo(&AuthKey::new("abc"), &NewPet::new("Tommy", "kit", "3"))
        .await
        .unwrap();

    mock.assert_async().await;
    let pet: Pet = response.body.decode().unwrap();
    assert_eq!(pet.name.as_deref(), Some("Tommy"));
    assert!(!pet.has_photo());
}

#[tokio::test]
async fn test_create_pet_without_photo_encodes_cyrillic_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/create_pet_simple")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(
            "name=%D0%91%D0%B0%D1%80%D0%B1%D0%BE%D1%81%D0%BA%D0%B8%D0%BD\
             &animal_type=%D0%B4%D0%B2%D0%BE%D1%80%D1%82%D0%B5%D1%80%D1%8C%D0%B5%D1%80\
             &age=47",
        )
        .with_status(200)
        .with_body(r#"{"id": "p8", "name": "Барбоскин", "animal_type": "двортерьер", "age": "47"}"#)
        .create_async()
        .await;

    let (client, log) = create_test_client(&server.url());
    let response = client
        .create_pet_without_photo(
            &AuthKey::new("abc"),
            &NewPet::new("Барбоскин", "двортерьер", 47),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    let pet: Pet = response.body.decode().unwrap();
    assert_eq!(pet.name.as_deref(), Some("Барбоскин"));
    assert!(read_log(&log).contains("Барбоскин"));
}

#[tokio::test]
async fn test_create_pet_sends_cyrillic_fields_in_multipart() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/pets")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="name"\r\n\r\nБарбоскин\r\n"#.into()),
            Matcher::Regex(r#"name="animal_type"\r\n\r\nдвортерьер\r\n"#.into()),
            Matcher::Regex(r#"name="age"\r\n\r\n47\r\n"#.into()),
            Matcher::Regex(r#"name="pet_photo"; filename="#.into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id": "p9", "name": "Барбоскин", "animal_type": "двортерьер", "age": "47"}"#)
        .create_async()
        .await;

    let photo = write_temp_photo("jpg", b"fake-jpeg-bytes");
    let (client, _log) = create_test_client(&server.url());
    let response = client
        .create_pet(
            &AuthKey::new("abc"),
            &NewPet::new("Барбоскин", "двортерьер", 47),
            &photo,
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.body.get("animal_type"), Some(&json!("двортерьер")));
}

#[tokio::test]
async fn test_update_pet_puts_form_to_pet_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/pets/p1")
        .match_header("auth_key", "abc")
        .match_body("name=Murzik&animal_type=Kote&age=5")
        .with_status(200)
        .with_body(r#"{"id": "p1", "name": "Murzik", "animal_type": "Kote", "age": 5}"#)
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let response = client
        .update_pet(&AuthKey::new("abc"), "p1", &NewPet::new("Murzik", "Kote", 5))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.method, Method::PUT);
    let pet: Pet = response.body.decode().unwrap();
    assert_eq!(pet.age.as_deref(), Some("5"));
}

#[tokio::test]
async fn test_delete_pet_with_empty_body_is_raw_empty() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/pets/p1")
        .match_header("auth_key", "abc")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let (status, body) = client
        .delete_pet(&AuthKey::new("abc"), "p1")
        .await
        .unwrap()
        .into_parts();

    mock.assert_async().await;
    assert_eq!(status, 200);
    assert_eq!(body, ResponseBody::Raw(String::new()));
}

#[tokio::test]
async fn test_delete_pet_with_foreign_key_is_forbidden() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/api/pets/p1")
        .match_header("auth_key", "qwe83")
        .with_status(403)
        .with_body("Forbidden")
        .create_async()
        .await;

    let (client, _log) = create_test_client(&server.url());
    let response = client
        .delete_pet(&AuthKey::new("qwe83"), "p1")
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_attach_photo_posts_photo_only() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/pets/set_photo/p1")
        .match_header("auth_key", "abc")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="pet_photo""#.into()),
            Matcher::Regex("fake-jpeg-bytes".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id": "p1", "pet_photo": "data:image/jpeg;base64,ZmFrZQ=="}"#)
        .create_async()
        .await;

    let photo = write_temp_photo("jpeg", b"fake-jpeg-bytes");
    let (client, _log) = create_test_client(&server.url());
    let response = client
        .attach_photo(&AuthKey::new("abc"), "p1", &photo)
        .await
        .unwrap();

    mock.assert_async().await;
    let pet: Pet = response.body.decode().unwrap();
    assert!(pet.has_photo());
}

#[tokio::test]
async fn test_attach_photo_missing_file_is_io_error() {
    let server = Server::new_async().await;
    let (client, log) = create_test_client(&server.url());
    let missing = std::env::temp_dir().join(format!("missing-{}.jpg", get_id()));

    let result = client.attach_photo(&AuthKey::new("abc"), "p1", &missing).await;

    assert!(matches!(result, Err(AppError::Io(_))));
    let content = read_log(&log);
    assert!(content.contains("Path: api/pets/set_photo/p1"));
    assert!(content.contains("Error: io error"));
}

#[tokio::test]
async fn test_transport_failure_propagates_as_http_error() {
    let log_path = temp_log_path();
    let config = create_test_config("http://127.0.0.1:1", &log_path, LogPolicy::All);
    let client = Client::new(config).unwrap();

    let result = client.delete_pet(&AuthKey::new("abc"), "p1").await;

    assert!(matches!(result, Err(AppError::Http(_))));
    let content = read_log(&log_path);
    assert!(content.contains("Method: DELETE"));
    assert!(content.contains("Error: http error"));
    assert!(!content.contains("Status:"));
}

#[tokio::test]
async fn test_transport_failure_not_logged_with_completed_only() {
    let log_path = temp_log_path();
    let config = create_test_config("http://127.0.0.1:1", &log_path, LogPolicy::CompletedOnly);
    let client = Client::new(config).unwrap();

    let result = client.list_pets(&AuthKey::new("abc"), &PetFilter::All).await;

    assert!(matches!(result, Err(AppError::Http(_))));
    assert!(!log_path.exists());
}

#[tokio::test]
async fn test_completed_call_is_logged_with_method_status_and_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/key")
        .with_status(200)
        .with_body(r#"{"key":"abc"}"#)
        .create_async()
        .await;

    let (client, log) = create_test_client(&server.url());
    client.authenticate("tester@example.com", "secret").await.unwrap();
    client.authenticate("tester@example.com", "secret").await.unwrap();

    let content = read_log(&log);
    assert_eq!(content.matches("--- Request ---").count(), 2);
    assert!(content.contains("Method: GET"));
    assert!(content.contains("Path: api/key"));
    assert!(content.contains("Status: 200"));
    assert!(content.contains(r#"Response: {"key":"abc"}"#));
}

#[tokio::test]
async fn test_base_url_with_trailing_slash_is_joined_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/pets/p9")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let log_path = temp_log_path();
    let config = create_test_config(&format!("{}/", server.url()), &log_path, LogPolicy::Disabled);
    let client = Client::new(config).unwrap();
    let response = client.delete_pet(&AuthKey::new("abc"), "p9").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert!(!log_path.exists());
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let log_path = temp_log_path();
    let config = create_test_config("not a url", &log_path, LogPolicy::All);
    let result = Client::new(config);
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_from_env_rejects_invalid_base_url() {
    // SAFETY: no other unit test reads PETFRIENDS_BASE_URL
    unsafe { std::env::set_var("PETFRIENDS_BASE_URL", "not a url") };
    let result = Client::from_env();
    unsafe { std::env::remove_var("PETFRIENDS_BASE_URL") };
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}
