use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::models::department::Department;
use crate::models::employee::{EmployeeDto, EmployeeUpsert};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("record not found")]
    NotFound,
    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Thin wrapper over the REST routes. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn departments(&self) -> Result<Vec<Department>, ClientError> {
        decode(self.http.get(self.url("department")).send().await?).await
    }

    pub async fn department(&self, department_id: i32) -> Result<Department, ClientError> {
        decode(self.http.get(self.url(&format!("department/{department_id}"))).send().await?).await
    }

    pub async fn create_department(&self, name: &str) -> Result<Department, ClientError> {
        let response = self
            .http
            .post(self.url("department"))
            .json(&json!({ "DepartmentName": name }))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_department(&self, department: &Department) -> Result<Department, ClientError> {
        decode(self.http.put(self.url("department")).json(department).send().await?).await
    }

    pub async fn delete_department(&self, department_id: i32) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("department/{department_id}")))
            .send()
            .await?;
        check(response).await.map(drop)
    }

    pub async fn employees(&self) -> Result<Vec<EmployeeDto>, ClientError> {
        decode(self.http.get(self.url("employee")).send().await?).await
    }

    pub async fn employee(&self, employee_id: i32) -> Result<EmployeeDto, ClientError> {
        decode(self.http.get(self.url(&format!("employee/{employee_id}"))).send().await?).await
    }

    pub async fn create_employee(&self, employee: &EmployeeUpsert) -> Result<EmployeeDto, ClientError> {
        decode(self.http.post(self.url("employee")).json(employee).send().await?).await
    }

    pub async fn update_employee(&self, employee_id: i32, employee: &EmployeeUpsert) -> Result<EmployeeDto, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("employee/{employee_id}")))
            .json(employee)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_employee(&self, employee_id: i32) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("employee/{employee_id}")))
            .send()
            .await?;
        check(response).await.map(drop)
    }

    /// Uploads a photo and returns the name the server stored it under.
    pub async fn upload_photo(&self, bytes: Vec<u8>, file_name: &str) -> Result<String, ClientError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_owned()));
        decode(self.http.post(self.url("employee/SaveFile")).multipart(form).send().await?).await
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    Ok(check(response).await?.json::<T>().await?)
}
