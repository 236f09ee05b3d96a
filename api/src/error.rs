use std::fmt;

use rocket::http::{ContentType, Status};
use rocket::response::Responder;
use rocket::serde::json::serde_json::json;
use rocket::{response, Request, Response};
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::Responses;
use rocket_okapi::okapi::schemars::{self, JsonSchema, Map};
use rocket_okapi::response::OpenApiResponderInner;
use serde::{Deserialize, Serialize};
use service::error::GenericError;

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&str> for ErrorBody {
    fn from(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    TeamError(TeamError),
    HoleError(HoleError),
    ScoreError(ScoreError),
    NotFound(&'static str),
    BadRequest(&'static str),
    UnknownError,
}

trait MyRocketError {
    fn to_rocket_status(&self) -> Status;
    fn to_err_message(&self) -> &'static str;
}

impl MyRocketError for Error {
    fn to_rocket_status(&self) -> Status {
        match self {
            Self::TeamError(e) => e.to_rocket_status(),
            Self::HoleError(e) => e.to_rocket_status(),
            Self::ScoreError(e) => e.to_rocket_status(),
            Self::NotFound(_) => Status::NotFound,
            Self::BadRequest(_) => Status::BadRequest,
            Self::UnknownError => Status::InternalServerError,
        }
    }
    fn to_err_message(&self) -> &'static str {
        match self {
            Self::TeamError(e) => e.to_err_message(),
            Self::HoleError(e) => e.to_err_message(),
            Self::ScoreError(e) => e.to_err_message(),
            Self::NotFound(msg) | Self::BadRequest(msg) => msg,
            Self::UnknownError => "Unknown error",
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = json!({ "error": self.to_err_message() }).to_string();
        Response::build()
            .status(self.to_rocket_status())
            .header(ContentType::JSON)
            .sized_body(body.len(), std::io::Cursor::new(body))
            .ok()
    }
}

impl From<GenericError> for Error {
    fn from(e: GenericError) -> Self {
        match e {
            GenericError::NotFound(msg) => Self::NotFound(msg),
            GenericError::BadRequest(msg) => Self::BadRequest(msg),
            GenericError::UnknownError(_) => Self::UnknownError,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TeamError {
    NotFound,
}

impl MyRocketError for TeamError {
    fn to_rocket_status(&self) -> Status {
        match self {
            Self::NotFound => Status::NotFound,
        }
    }
    fn to_err_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Team not found",
        }
    }
}

impl From<TeamError> for Error {
    fn from(e: TeamError) -> Self {
        Self::TeamError(e)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum HoleError {
    NotFound,
}

impl MyRocketError for HoleError {
    fn to_rocket_status(&self) -> Status {
        match self {
            Self::NotFound => Status::NotFound,
        }
    }
    fn to_err_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Hole not found",
        }
    }
}

impl From<HoleError> for Error {
    fn from(e: HoleError) -> Self {
        Self::HoleError(e)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ScoreError {
    NotFound,
}

impl MyRocketError for ScoreError {
    fn to_rocket_status(&self) -> Status {
        match self {
            Self::NotFound => Status::NotFound,
        }
    }
    fn to_err_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Score not found",
        }
    }
}

impl From<ScoreError> for Error {
    fn from(e: ScoreError) -> Self {
        Self::ScoreError(e)
    }
}

impl OpenApiResponderInner for Error {
    fn responses(_: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        use rocket_okapi::okapi::openapi3::{RefOr, Response as OpenApiResponse};

        let mut responses = Map::new();
        responses.insert(
            "400".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [400 Bad Request](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/400)\n\
                The request given is wrongly formatted or data asked could not be fulfilled. \
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "404".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [404 Not Found](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404)\n\
                The team, hole, user or score asked for does not exist.\
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "422".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [422 Unprocessable Entity](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/422)\n\
                This response is given when you request body or an id in the path is not correctly formatted. \
                ".to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "500".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [500 Internal Server Error](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/500)\n\
                This response is given when something went wrong on the server. \
                ".to_string(),
                ..Default::default()
            }),
        );
        Ok(Responses {
            responses,
            ..Default::default()
        })
    }
}

/// Anything that can stop the server from starting.
#[derive(Debug)]
pub enum LaunchError {
    Config(Box<rocket::figment::Error>),
    Database(sea_orm::DbErr),
    Cors(rocket_cors::Error),
    Rocket(Box<rocket::Error>),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Database(e) => write!(f, "database unavailable: {e}"),
            Self::Cors(e) => write!(f, "invalid CORS options: {e}"),
            Self::Rocket(e) => write!(f, "server failed: {e}"),
        }
    }
}

impl std::error::Error for LaunchError {}

impl From<rocket::figment::Error> for LaunchError {
    fn from(e: rocket::figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

impl From<sea_orm::DbErr> for LaunchError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e)
    }
}

impl From<rocket_cors::Error> for LaunchError {
    fn from(e: rocket_cors::Error) -> Self {
        Self::Cors(e)
    }
}

impl From<rocket::Error> for LaunchError {
    fn from(e: rocket::Error) -> Self {
        Self::Rocket(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_keep_their_message() {
        let e = Error::from(GenericError::NotFound("User not found"));
        assert_eq!(e.to_rocket_status(), Status::NotFound);
        assert_eq!(e.to_err_message(), "User not found");

        let e = Error::from(GenericError::BadRequest("Invalid input data"));
        assert_eq!(e.to_rocket_status(), Status::BadRequest);
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let e = Error::from(GenericError::UnknownError("Unable to save score"));
        assert_eq!(e.to_rocket_status(), Status::InternalServerError);
        assert_eq!(e.to_err_message(), "Unknown error");
    }

    #[test]
    fn missing_entities_are_404() {
        for e in [
            Error::from(TeamError::NotFound),
            Error::from(HoleError::NotFound),
            Error::from(ScoreError::NotFound),
        ] {
            assert_eq!(e.to_rocket_status(), Status::NotFound);
        }
        assert_eq!(Error::from(HoleError::NotFound).to_err_message(), "Hole not found");
    }
}
