//! Typed endpoint surface over [`HttpClient`]
//!
//! Thin wrappers for the backend REST contract. Primary actions validate
//! required fields before dispatching; anything the backend rejects comes
//! back as a normalized [`ClientError`].

use serde_json::Value;

use crate::{ClientError, ClientResult, HttpClient};
use shared::client::{
    LoginRequest, LoginResponse, RejectRoleRequest, SendChatRequest, StatusUpdate,
};
use shared::models::{
    ChatHistory, Order, OrderStatus, Product, RoleRequestList, UserProfile,
};

/// Multipart field set for product create/update.
///
/// Mirrors the admin form: scalar fields plus either an uploaded image file
/// or an image URL. Building the form consumes the value.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub image: Option<ImageUpload>,
    pub image_url: Option<String>,
}

/// Raw image payload attached to a product form
#[derive(Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ProductForm {
    fn into_multipart(self) -> ClientResult<reqwest::multipart::Form> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation("Product name is required".into()));
        }

        let mut form = reqwest::multipart::Form::new()
            .text("name", self.name)
            .text("description", self.description)
            .text("price", self.price.to_string())
            .text("stock", self.stock.to_string());

        if let Some(upload) = self.image {
            let part = reqwest::multipart::Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str("application/octet-stream")
                .map_err(ClientError::Http)?;
            form = form.part("image", part);
        } else if let Some(url) = self.image_url {
            form = form.text("image_url", url);
        }

        Ok(form)
    }
}

impl HttpClient {
    // ========== Auth API ==========

    /// Login with phone number and password.
    ///
    /// The returned token is not stored here; persist it through
    /// [`crate::SessionStore`].
    pub async fn login(&self, nomor_hp: &str, password: &str) -> ClientResult<LoginResponse> {
        if nomor_hp.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Phone number and password are required".into(),
            ));
        }

        let request = LoginRequest {
            nomor_hp: nomor_hp.to_string(),
            password: password.to_string(),
        };

        self.post("/login", &request).await
    }

    // ========== Profiles API ==========

    /// List all user profiles
    pub async fn profiles(&self) -> ClientResult<Vec<UserProfile>> {
        self.get("/profiles").await
    }

    /// Current authenticated user's profile
    pub async fn me(&self) -> ClientResult<UserProfile> {
        self.get("/profiles/me").await
    }

    // ========== Orders API ==========

    /// List all orders
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/orders").await
    }

    /// Fetch a single order with its items
    pub async fn order(&self, id: i64) -> ClientResult<Order> {
        self.get(&format!("/orders/{}", id)).await
    }

    /// Update an order's status
    pub async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<Value> {
        self.put(&format!("/orders/{}/status", id), &StatusUpdate { status })
            .await
    }

    // ========== Products API ==========

    /// List all products
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.get("/products").await
    }

    /// Create a product (multipart; bypasses JSON encoding)
    pub async fn create_product(&self, form: ProductForm) -> ClientResult<Value> {
        self.post_form("/products", form.into_multipart()?).await
    }

    /// Update a product (multipart; bypasses JSON encoding)
    pub async fn update_product(&self, id: i64, form: ProductForm) -> ClientResult<Value> {
        self.put_form(&format!("/products/{}", id), form.into_multipart()?)
            .await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i64) -> ClientResult<Value> {
        self.delete(&format!("/products/{}", id)).await
    }

    // ========== Chat API ==========

    /// Conversation history with one user
    pub async fn chat_history(&self, user_id: i64) -> ClientResult<ChatHistory> {
        self.get(&format!("/chats/{}", user_id)).await
    }

    /// Send a chat message to a user, addressed by phone number
    pub async fn send_chat(&self, receiver_phone: &str, message: &str) -> ClientResult<Value> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ClientError::Validation("Message must not be empty".into()));
        }

        let request = SendChatRequest {
            receiver_phone: receiver_phone.to_string(),
            message: message.to_string(),
        };

        self.post("/chats/send", &request).await
    }

    // ========== Role Change API ==========

    /// List role change requests
    pub async fn role_requests(&self) -> ClientResult<RoleRequestList> {
        self.get("/role-change/requests").await
    }

    /// Approve a role change request
    pub async fn approve_role_request(&self, id: i64) -> ClientResult<Value> {
        self.put_empty(&format!("/role-change/{}/approve", id)).await
    }

    /// Reject a role change request with a mandatory reason
    pub async fn reject_role_request(&self, id: i64, reason: &str) -> ClientResult<Value> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ClientError::Validation(
                "Rejection reason is required".into(),
            ));
        }

        self.put(
            &format!("/role-change/{}/reject", id),
            &RejectRoleRequest {
                reason: reason.to_string(),
            },
        )
        .await
    }
}
