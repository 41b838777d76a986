use crate::config::ProviderConfig;
use crate::model::{
    Id, ObjectPayload, ObjectSchemaPayload, ObjectTypeAttributePayload, ObjectTypePayload,
    WireObject, WireObjectSchema, WireObjectType, WireObjectTypeAttribute,
};
use anyhow::{anyhow, Result};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP client for the asset catalog's workspace API. Authentication is
/// basic auth with the account mail and a personal access token. Errors are
/// surfaced verbatim; retry policy belongs to the caller's engine.
pub struct RestCatalog {
    client: Client,
    host: String,
    mail: String,
    token: String,
}

impl RestCatalog {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        if config.host.is_empty() {
            return Err(anyhow!("catalog host must not be empty"));
        }

        let client = Client::builder()
            .user_agent(concat!("assets-sync-rust/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            host: config.host.trim_end_matches('/').to_string(),
            mail: config.mail.clone(),
            token: config.token.clone(),
        })
    }

    fn request(&self, method: Method, workspace_id: &str, path: &str) -> RequestBuilder {
        let url = format!(
            "{}/jsm/assets/workspace/{}/v1/{}",
            self.host, workspace_id, path
        );
        log::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .basic_auth(&self.mail, Some(&self.token))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("catalog returned {}: {}", status, body));
        }
        Ok(response.json().await?)
    }

    async fn send_json_opt<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>> {
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("catalog returned {}: {}", status, body));
        }
        Ok(Some(response.json().await?))
    }

    async fn send_unit(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("catalog returned {}: {}", status, body));
        }
        Ok(())
    }

    fn with_body<B: Serialize>(request: RequestBuilder, body: &B) -> RequestBuilder {
        request.json(body)
    }
}

#[async_trait::async_trait]
impl super::ObjectStore for RestCatalog {
    async fn get_object(&self, workspace_id: &str, object_id: &Id) -> Result<Option<WireObject>> {
        self.send_json_opt(self.request(Method::GET, workspace_id, &format!("object/{}", object_id)))
            .await
    }

    async fn create_object(
        &self,
        workspace_id: &str,
        payload: &ObjectPayload,
    ) -> Result<WireObject> {
        self.send_json(Self::with_body(
            self.request(Method::POST, workspace_id, "object/create"),
            payload,
        ))
        .await
    }

    async fn update_object(
        &self,
        workspace_id: &str,
        object_id: &Id,
        payload: &ObjectPayload,
    ) -> Result<WireObject> {
        self.send_json(Self::with_body(
            self.request(Method::PUT, workspace_id, &format!("object/{}", object_id)),
            payload,
        ))
        .await
    }

    async fn delete_object(&self, workspace_id: &str, object_id: &Id) -> Result<()> {
        self.send_unit(self.request(
            Method::DELETE,
            workspace_id,
            &format!("object/{}", object_id),
        ))
        .await
    }
}

#[async_trait::async_trait]
impl super::ObjectTypeStore for RestCatalog {
    async fn get_object_type(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
    ) -> Result<Option<WireObjectType>> {
        self.send_json_opt(self.request(
            Method::GET,
            workspace_id,
            &format!("objecttype/{}", object_type_id),
        ))
        .await
    }

    async fn create_object_type(
        &self,
        workspace_id: &str,
        payload: &ObjectTypePayload,
    ) -> Result<WireObjectType> {
        self.send_json(Self::with_body(
            self.request(Method::POST, workspace_id, "objecttype/create"),
            payload,
        ))
        .await
    }

    async fn update_object_type(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
        payload: &ObjectTypePayload,
    ) -> Result<WireObjectType> {
        self.send_json(Self::with_body(
            self.request(
                Method::PUT,
                workspace_id,
                &format!("objecttype/{}", object_type_id),
            ),
            payload,
        ))
        .await
    }

    async fn delete_object_type(&self, workspace_id: &str, object_type_id: &Id) -> Result<()> {
        self.send_unit(self.request(
            Method::DELETE,
            workspace_id,
            &format!("objecttype/{}", object_type_id),
        ))
        .await
    }

    async fn list_object_type_attributes(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
    ) -> Result<Vec<WireObjectTypeAttribute>> {
        self.send_json(self.request(
            Method::GET,
            workspace_id,
            &format!("objecttype/{}/attributes", object_type_id),
        ))
        .await
    }

    async fn create_object_type_attribute(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
        payload: &ObjectTypeAttributePayload,
    ) -> Result<WireObjectTypeAttribute> {
        self.send_json(Self::with_body(
            self.request(
                Method::POST,
                workspace_id,
                &format!("objecttypeattribute/{}", object_type_id),
            ),
            payload,
        ))
        .await
    }

    async fn update_object_type_attribute(
        &self,
        workspace_id: &str,
        object_type_id: &Id,
        attribute_id: &Id,
        payload: &ObjectTypeAttributePayload,
    ) -> Result<WireObjectTypeAttribute> {
        self.send_json(Self::with_body(
            self.request(
                Method::PUT,
                workspace_id,
                &format!("objecttypeattribute/{}/{}", object_type_id, attribute_id),
            ),
            payload,
        ))
        .await
    }

    async fn delete_object_type_attribute(
        &self,
        workspace_id: &str,
        attribute_id: &Id,
    ) -> Result<()> {
        self.send_unit(self.request(
            Method::DELETE,
            workspace_id,
            &format!("objecttypeattribute/{}", attribute_id),
        ))
        .await
    }
}

#[async_trait::async_trait]
impl super::ObjectSchemaStore for RestCatalog {
    async fn get_object_schema(
        &self,
        workspace_id: &str,
        schema_id: &Id,
    ) -> Result<Option<WireObjectSchema>> {
        self.send_json_opt(self.request(
            Method::GET,
            workspace_id,
            &format!("objectschema/{}", schema_id),
        ))
        .await
    }

    async fn create_object_schema(
        &self,
        workspace_id: &str,
        payload: &ObjectSchemaPayload,
    ) -> Result<WireObjectSchema> {
        self.send_json(Self::with_body(
            self.request(Method::POST, workspace_id, "objectschema/create"),
            payload,
        ))
        .await
    }

    async fn update_object_schema(
        &self,
        workspace_id: &str,
        schema_id: &Id,
        payload: &ObjectSchemaPayload,
    ) -> Result<WireObjectSchema> {
        self.send_json(Self::with_body(
            self.request(
                Method::PUT,
                workspace_id,
                &format!("objectschema/{}", schema_id),
            ),
            payload,
        ))
        .await
    }

    async fn delete_object_schema(&self, workspace_id: &str, schema_id: &Id) -> Result<()> {
        self.send_unit(self.request(
            Method::DELETE,
            workspace_id,
            &format!("objectschema/{}", schema_id),
        ))
        .await
    }
}
