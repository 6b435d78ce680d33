use crate::{CurrentResource, FormPayload, Verb};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A trait that defines the request-response relationship and metadata for a posts API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: Verb;
}

// =========================================================
// Request Definitions
// =========================================================

/// Fetch one post by category and slug
#[derive(Debug, Serialize, Deserialize)]
pub struct GetPostRequest {
    pub category: String,
    pub slug: String,
}

impl ApiRequest for GetPostRequest {
    type Response = Option<CurrentResource>;
    const PATH: &'static str = "/api/posts/get";
    const METHOD: Verb = Verb::Post;
}

/// List the posts of a category
#[derive(Debug, Serialize, Deserialize)]
pub struct ListPostsRequest {
    pub category: String,
}

impl ApiRequest for ListPostsRequest {
    type Response = Vec<CurrentResource>;
    const PATH: &'static str = "/api/posts/list";
    const METHOD: Verb = Verb::Post;
}

/// Create a post
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(flatten)]
    pub payload: FormPayload,
}

impl ApiRequest for CreatePostRequest {
    type Response = ();
    const PATH: &'static str = "/api/posts";
    const METHOD: Verb = Verb::Post;
}

/// Replace the editable fields of a post
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: String,
    #[serde(flatten)]
    pub payload: FormPayload,
}

impl ApiRequest for UpdatePostRequest {
    type Response = ();
    const PATH: &'static str = "/api/posts";
    const METHOD: Verb = Verb::Put;
}

/// Delete a post
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub id: String,
}

impl ApiRequest for DeletePostRequest {
    type Response = ();
    const PATH: &'static str = "/api/posts";
    const METHOD: Verb = Verb::Delete;
}

/// Exchange credentials for a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: Verb = Verb::Post;
}
