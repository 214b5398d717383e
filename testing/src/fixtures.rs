use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path prefix the mock server serves people under.
pub const PEOPLE_PATH: &str = "/api/people/";

pub fn luke_skywalker() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": [
            "https://swapi.dev/api/films/1/",
            "https://swapi.dev/api/films/2/",
            "https://swapi.dev/api/films/3/",
            "https://swapi.dev/api/films/6/"
        ],
        "species": [],
        "vehicles": [
            "https://swapi.dev/api/vehicles/14/",
            "https://swapi.dev/api/vehicles/30/"
        ],
        "starships": [
            "https://swapi.dev/api/starships/12/",
            "https://swapi.dev/api/starships/22/"
        ],
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": "https://swapi.dev/api/people/1/"
    })
}

pub fn c3po() -> Value {
    json!({
        "name": "C-3PO",
        "height": "167",
        "mass": "75",
        "hair_color": "n/a",
        "birth_year": "112BBY",
        "gender": "n/a",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": [
            "https://swapi.dev/api/films/1/",
            "https://swapi.dev/api/films/2/"
        ],
        "vehicles": [],
        "starships": [],
        "url": "https://swapi.dev/api/people/2/"
    })
}

pub fn darth_vader() -> Value {
    json!({
        "name": "Darth Vader",
        "height": "202",
        "mass": "136",
        "hair_color": "none",
        "birth_year": "41.9BBY",
        "gender": "male",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": ["https://swapi.dev/api/films/1/"],
        "vehicles": [],
        "starships": ["https://swapi.dev/api/starships/13/"],
        "url": "https://swapi.dev/api/people/4/"
    })
}

/// A mock SWAPI people endpoint.
pub struct PeopleServer {
    server: MockServer
}

impl PeopleServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        tracing::debug!(uri = %server.uri(), "People mock server started");
        Self { server }
    }

    /// Starts a server preloaded with people 1, 2 and 4.
    pub async fn with_canon() -> Self {
        let server = Self::start().await;
        server.person(1, luke_skywalker()).await;
        server.person(2, c3po()).await;
        server.person(4, darth_vader()).await;
        server
    }

    /// Base URL to configure the client with, including the trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), PEOPLE_PATH)
    }

    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    pub async fn person(&self, id: u64, body: Value) {
        self.respond(id, ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    /// Serves `body` verbatim, for malformed payloads.
    pub async fn raw(&self, id: u64, status: u16, body: &str) {
        self.respond(id, ResponseTemplate::new(status).set_body_string(body))
            .await;
    }

    /// Serves `body` after `delay`.
    pub async fn delayed(&self, id: u64, body: Value, delay: Duration) {
        self.respond(
            id,
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(delay)
        )
        .await;
    }

    pub async fn respond(&self, id: u64, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("{PEOPLE_PATH}{id}")))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
