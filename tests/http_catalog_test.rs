use anyhow::Result;
use concert_catalog::{
    CatalogError, CatalogReader, ConcertRepository, HttpSource, Operation, DEFAULT_DOCUMENT_PATH,
};
use httpmock::prelude::*;
use serde_json::json;

fn catalog_document() -> serde_json::Value {
    json!({
        "concerts": {
            "data": [
                {
                    "id": "c1",
                    "title": "Hello Tour",
                    "artist": [{"name": "Adele", "genre": "pop"}],
                    "venue": {"name": "O2 Arena", "city": "London"}
                },
                {
                    "id": "c2",
                    "title": "Certified Lover Boy",
                    "artist": [{"name": "Drake"}, {"name": "21 Savage"}]
                },
                {
                    "id": "c3",
                    "title": "Festival"
                }
            ]
        }
    })
}

#[tokio::test]
async fn test_list_over_http() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(DEFAULT_DOCUMENT_PATH);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_document());
    });

    let reader = CatalogReader::new(HttpSource::new(&server.base_url())?);
    let concerts = reader.list().await?;

    api_mock.assert();
    assert_eq!(concerts.len(), 3);
    assert_eq!(
        serde_json::to_value(&concerts)?,
        catalog_document()["concerts"]["data"]
    );
    Ok(())
}

#[tokio::test]
async fn test_lookups_over_http() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/db.json");
        then.status(200).json_body(catalog_document());
    });

    let reader = CatalogReader::new(HttpSource::new(&server.base_url())?);

    let concert = reader.get_by_id("c2").await?.expect("c2 present");
    assert_eq!(concert.data["title"], "Certified Lover Boy");
    assert!(reader.get_by_id("c9").await?.is_none());

    let matches = reader.get_by_artist_name("SAVAGE").await?;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id(), Some("c2"));
    assert!(reader.get_by_artist_name("zzz").await?.is_empty());

    // no caching: one request per read
    api_mock.assert_hits(4);
    Ok(())
}

#[tokio::test]
async fn test_missing_concerts_key_yields_empty_list() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/db.json");
        then.status(200).json_body(json!({"users": {"data": [{"id": "u1"}]}}));
    });

    let reader = CatalogReader::new(HttpSource::new(&server.base_url())?);
    assert!(reader.list().await?.is_empty());
    assert!(reader.get_by_id("u1").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_transport_error() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/db.json");
        then.status(500);
    });

    let reader = CatalogReader::new(HttpSource::new(&server.base_url())?);
    let err = reader.list().await.unwrap_err();

    api_mock.assert();
    assert!(err.is_transport());
    assert!(matches!(err, CatalogError::HttpStatus { status: 500, .. }));
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/db.json");
        then.status(200).body("<!doctype html><html></html>");
    });

    let reader = CatalogReader::new(HttpSource::new(&server.base_url())?);
    let err = reader.get_by_artist_name("adele").await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    Ok(())
}

#[tokio::test]
async fn test_custom_document_path() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/static/concerts.json");
        then.status(200).json_body(catalog_document());
    });

    let reader = CatalogReader::with_document_path(
        HttpSource::new(&server.base_url())?,
        "/static/concerts.json",
    );
    assert_eq!(reader.list().await?.len(), 3);
    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_mutators_never_touch_the_server() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(catalog_document());
    });

    let reader = CatalogReader::new(HttpSource::new(&server.base_url())?);
    let concert = reader.get_by_id("c1").await?.expect("c1 present");

    let err = reader.create(concert.clone()).unwrap_err();
    assert!(matches!(err, CatalogError::Unsupported { operation: Operation::Create }));
    assert!(reader.update("c1", concert).unwrap_err().is_unsupported());
    assert!(reader.delete("c1").unwrap_err().is_unsupported());

    api_mock.assert_hits(1);
    assert_eq!(reader.list().await?.len(), 3);
    Ok(())
}
