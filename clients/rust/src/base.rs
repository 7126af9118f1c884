use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub struct BaseClient {
    client: Client,
    address: String,
    session_id: Option<String>,
}

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode(StatusCode),
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

impl APIError {
    /// The status code returned by the server, if it got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self.variant {
            APIErrorVariant::UnexpectedStatusCode(status) => Some(status),
            _ => None,
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        let address = format!("{}/api/v1", address.trim_end_matches('/'));
        Self {
            client: Client::new(),
            address,
            session_id: None,
        }
    }

    pub fn set_session_id(&mut self, session_id: String) {
        self.session_id = Some(session_id);
    }

    fn request(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        let req = self.client.request(method, url);
        match &self.session_id {
            Some(session_id) => req.bearer_auth(session_id),
            None => req,
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        expected_status_code: StatusCode,
        res: Result<reqwest::Response, reqwest::Error>,
    ) -> APIResponse<T> {
        let res = res.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;

        let status = res.status();
        if status != expected_status_code {
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode(status),
                message: res.text().await.unwrap_or_default(),
            });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.request(Method::GET, path).send().await;
        self.handle_response(expected_status_code, res).await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: String,
        query: &Q,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.request(Method::GET, path).query(query).send().await;
        self.handle_response(expected_status_code, res).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.request(Method::DELETE, path).send().await;
        self.handle_response(expected_status_code, res).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.request(Method::POST, path).json(&body).send().await;
        self.handle_response(expected_status_code, res).await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.request(Method::PUT, path).json(&body).send().await;
        self.handle_response(expected_status_code, res).await
    }
}
