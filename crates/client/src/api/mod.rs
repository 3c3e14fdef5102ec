//! REST gateway to the Pawly backend.
//!
//! A thin `reqwest` wrapper over the backend's JSON resource endpoints.
//! Catalog reads (products, doctors, pets, blog) are cached in-memory via
//! `moka` (5-minute TTL); catalog writes invalidate the affected entries.
//! The gateway performs no retries: a failed call surfaces its error and
//! leaves client state untouched.

mod cache;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use pawly_core::{AppointmentId, DoctorId, PetId, PostId, ProductId};

use cache::{CacheKey, CacheValue};
use types::{
    AdminStats, Appointment, AppointmentInput, BlogPost, Doctor, NewBlogPost, NewDoctor,
    NewProduct, Order, OrderInput, Pet, Product, RegisterInput, Volunteer, VolunteerApplication,
};

/// Catalog cache TTL.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when talking to the Pawly backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("API error: {status} - {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Login rejected by the backend (401).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Client for the Pawly backend REST API.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a client for the API at `base_url`
    /// (e.g., `http://localhost:5044/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        let base_url: String = base_url.into();
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_owned(),
                cache,
            }),
        }
    }

    /// Create a client from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &crate::config::ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.inner.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// PUT where the response body is irrelevant; only the status matters.
    async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.inner.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a user record.
    ///
    /// The body is returned raw: the backend's field casing is inconsistent,
    /// and normalization belongs to the session manager.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] on a 401, or another
    /// [`ApiError`] for transport/status/parse failures.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .inner
            .client
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::InvalidCredentials);
        }
        Self::decode(response).await
    }

    /// Register a new account. Returns the created-user body raw, for the
    /// same casing reason as [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the backend rejects
    /// the registration.
    #[instrument(skip(self, input))]
    pub async fn register(&self, input: &RegisterInput) -> Result<Value, ApiError> {
        self.post_json("/auth/register", input).await
    }

    // =========================================================================
    // Catalog: products
    // =========================================================================

    /// List all products (cached).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("cache hit for products");
            return Ok(products);
        }
        let products: Vec<Product> = self.get_json("/products").await?;
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Fetch one product by id (cached).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let key = CacheKey::Product(id.as_i64());
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!("cache hit for product {id}");
            return Ok(*product);
        }
        let product: Product = self.get_json(&format!("/products/{id}")).await?;
        self.inner
            .cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    /// Create a product (admin surface). Invalidates the product list cache.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn create_product(&self, input: &NewProduct) -> Result<Product, ApiError> {
        let product = self.post_json("/products", input).await?;
        self.inner.cache.invalidate(&CacheKey::Products).await;
        Ok(product)
    }

    /// Delete a product (admin surface). Invalidates cached entries.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("/products/{id}")).await?;
        self.inner.cache.invalidate(&CacheKey::Products).await;
        self.inner
            .cache
            .invalidate(&CacheKey::Product(id.as_i64()))
            .await;
        Ok(())
    }

    // =========================================================================
    // Catalog: doctors
    // =========================================================================

    /// List all doctors (cached).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        if let Some(CacheValue::Doctors(doctors)) = self.inner.cache.get(&CacheKey::Doctors).await {
            debug!("cache hit for doctors");
            return Ok(doctors);
        }
        let doctors: Vec<Doctor> = self.get_json("/doctors").await?;
        self.inner
            .cache
            .insert(CacheKey::Doctors, CacheValue::Doctors(doctors.clone()))
            .await;
        Ok(doctors)
    }

    /// Fetch one doctor by id (cached).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn get_doctor(&self, id: DoctorId) -> Result<Doctor, ApiError> {
        let key = CacheKey::Doctor(id.as_i64());
        if let Some(CacheValue::Doctor(doctor)) = self.inner.cache.get(&key).await {
            debug!("cache hit for doctor {id}");
            return Ok(*doctor);
        }
        let doctor: Doctor = self.get_json(&format!("/doctors/{id}")).await?;
        self.inner
            .cache
            .insert(key, CacheValue::Doctor(Box::new(doctor.clone())))
            .await;
        Ok(doctor)
    }

    /// Create a doctor (admin surface). Invalidates the doctor list cache.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn create_doctor(&self, input: &NewDoctor) -> Result<Doctor, ApiError> {
        let doctor = self.post_json("/doctors", input).await?;
        self.inner.cache.invalidate(&CacheKey::Doctors).await;
        Ok(doctor)
    }

    /// Delete a doctor (admin surface). Invalidates cached entries.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete_doctor(&self, id: DoctorId) -> Result<(), ApiError> {
        self.delete(&format!("/doctors/{id}")).await?;
        self.inner.cache.invalidate(&CacheKey::Doctors).await;
        self.inner
            .cache
            .invalidate(&CacheKey::Doctor(id.as_i64()))
            .await;
        Ok(())
    }

    // =========================================================================
    // Catalog: adoption listings & blog
    // =========================================================================

    /// List all adoption listings (cached).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_pets(&self) -> Result<Vec<Pet>, ApiError> {
        if let Some(CacheValue::Pets(pets)) = self.inner.cache.get(&CacheKey::Pets).await {
            debug!("cache hit for pets");
            return Ok(pets);
        }
        let pets: Vec<Pet> = self.get_json("/pets").await?;
        self.inner
            .cache
            .insert(CacheKey::Pets, CacheValue::Pets(pets.clone()))
            .await;
        Ok(pets)
    }

    /// Fetch one adoption listing by id (cached).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn get_pet(&self, id: PetId) -> Result<Pet, ApiError> {
        let key = CacheKey::Pet(id.as_i64());
        if let Some(CacheValue::Pet(pet)) = self.inner.cache.get(&key).await {
            debug!("cache hit for pet {id}");
            return Ok(*pet);
        }
        let pet: Pet = self.get_json(&format!("/pets/{id}")).await?;
        self.inner
            .cache
            .insert(key, CacheValue::Pet(Box::new(pet.clone())))
            .await;
        Ok(pet)
    }

    /// List all blog posts (cached).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        if let Some(CacheValue::Posts(posts)) = self.inner.cache.get(&CacheKey::Posts).await {
            debug!("cache hit for posts");
            return Ok(posts);
        }
        let posts: Vec<BlogPost> = self.get_json("/blog").await?;
        self.inner
            .cache
            .insert(CacheKey::Posts, CacheValue::Posts(posts.clone()))
            .await;
        Ok(posts)
    }

    /// Fetch one blog post by id (cached).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the id is unknown.
    pub async fn get_post(&self, id: PostId) -> Result<BlogPost, ApiError> {
        let key = CacheKey::Post(id.as_i64());
        if let Some(CacheValue::Post(post)) = self.inner.cache.get(&key).await {
            debug!("cache hit for post {id}");
            return Ok(*post);
        }
        let post: BlogPost = self.get_json(&format!("/blog/{id}")).await?;
        self.inner
            .cache
            .insert(key, CacheValue::Post(Box::new(post.clone())))
            .await;
        Ok(post)
    }

    // =========================================================================
    // Orders & appointments
    // =========================================================================

    /// Place an order for `user_email`. Never cached.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    #[instrument(skip(self, input))]
    pub async fn create_order(
        &self,
        input: &OrderInput,
        user_email: &str,
    ) -> Result<Order, ApiError> {
        self.post_json(
            &format!("/orders?userEmail={}", urlencoding::encode(user_email)),
            input,
        )
        .await
    }

    /// List the orders placed by `user_email`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_my_orders(&self, user_email: &str) -> Result<Vec<Order>, ApiError> {
        self.get_json(&format!(
            "/orders/my?userEmail={}",
            urlencoding::encode(user_email)
        ))
        .await
    }

    /// Book a clinic appointment for `user_email`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    #[instrument(skip(self, input))]
    pub async fn create_appointment(
        &self,
        input: &AppointmentInput,
        user_email: &str,
    ) -> Result<Appointment, ApiError> {
        self.post_json(
            &format!("/appointments?userEmail={}", urlencoding::encode(user_email)),
            input,
        )
        .await
    }

    /// List the appointments booked by `user_email`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_my_appointments(
        &self,
        user_email: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(&format!(
            "/appointments/my?userEmail={}",
            urlencoding::encode(user_email)
        ))
        .await
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Fetch the profile record for `email`.
    ///
    /// Returned raw for the same casing reason as [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_profile(&self, email: &str) -> Result<Value, ApiError> {
        self.get_json(&format!(
            "/users/profile?email={}",
            urlencoding::encode(email)
        ))
        .await
    }

    /// Update profile fields for `email` and return the updated record raw.
    ///
    /// Absent fields keep their server-side values; the caller merges the
    /// response into the session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    #[instrument(skip(self, partial))]
    pub async fn update_profile(&self, email: &str, partial: &Value) -> Result<Value, ApiError> {
        self.put_json(
            &format!("/users/profile?email={}", urlencoding::encode(email)),
            partial,
        )
        .await
    }

    // =========================================================================
    // Back office
    // =========================================================================

    /// List adoption listings awaiting approval. Never cached; the review
    /// queue must be fresh.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_pending_pets(&self) -> Result<Vec<Pet>, ApiError> {
        self.get_json("/pets/pending").await
    }

    /// Approve a pending adoption listing. Invalidates cached pet entries.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn approve_adoption(&self, id: PetId) -> Result<(), ApiError> {
        self.put_unit(&format!("/pets/{id}/approve"), &serde_json::json!({}))
            .await?;
        self.inner.cache.invalidate(&CacheKey::Pets).await;
        self.inner.cache.invalidate(&CacheKey::Pet(id.as_i64())).await;
        Ok(())
    }

    /// List every booked appointment across all users.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_all_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json("/appointments").await
    }

    /// Set the status of an appointment (e.g., "Confirmed", "Completed").
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn update_appointment_status(
        &self,
        id: AppointmentId,
        status: &str,
    ) -> Result<(), ApiError> {
        self.put_unit(
            &format!("/appointments/{id}/status"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    /// Publish a blog post. Invalidates the post list cache.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn create_post(&self, input: &NewBlogPost) -> Result<BlogPost, ApiError> {
        let post = self.post_json("/blog", input).await?;
        self.inner.cache.invalidate(&CacheKey::Posts).await;
        Ok(post)
    }

    /// Delete a blog post. Invalidates cached entries.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        self.delete(&format!("/blog/{id}")).await?;
        self.inner.cache.invalidate(&CacheKey::Posts).await;
        self.inner.cache.invalidate(&CacheKey::Post(id.as_i64())).await;
        Ok(())
    }

    /// Submit a volunteer application.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    #[instrument(skip(self, input))]
    pub async fn create_volunteer(
        &self,
        input: &VolunteerApplication,
    ) -> Result<Volunteer, ApiError> {
        self.post_json("/volunteers", input).await
    }

    /// List every submitted volunteer application.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_volunteers(&self) -> Result<Vec<Volunteer>, ApiError> {
        self.get_json("/volunteers").await
    }

    /// Fetch back-office dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn get_admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json("/admin/stats").await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_login_success_returns_raw_body() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({"email": "a@b.com", "password": "pw"}));
            then.status(200)
                .json_body(json!({"Email": "a@b.com", "Token": "t"}));
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        let body = client.login("a@b.com", "pw").await.unwrap();
        assert_eq!(body["Email"], json!("a@b.com"));
    }

    #[tokio::test]
    async fn test_login_401_is_invalid_credentials() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401);
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        let err = client.login("a@b.com", "wrong").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_non_success_status_surfaces() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/api/products");
            then.status(500).body("boom");
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        let err = client.get_products().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_get_products_hits_cache_on_second_read() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200)
                .json_body(json!([{"id": 1, "name": "Ball", "price": 4.25}]));
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        let first = client.get_products().await.unwrap();
        let second = client.get_products().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_get_my_orders_encodes_email() {
        let server = MockServer::start();
        // A plus-addressed email survives only if the query value is
        // percent-encoded; a raw `+` would decode to a space.
        let _m = server.mock(|when, then| {
            when.method(GET)
                .path("/api/orders/my")
                .query_param("userEmail", "a+tag@b.com");
            then.status(200)
                .json_body(json!([{"id": 3, "totalAmount": 30.48}]));
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        let orders = client.get_my_orders("a+tag@b.com").await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders.first().unwrap().id, pawly_core::OrderId::new(3));
    }

    #[tokio::test]
    async fn test_create_order_posts_snapshot_payload() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(POST)
                .path("/api/orders")
                .query_param("userEmail", "a@b.com")
                .json_body_includes(r#"{"totalAmount": 30.48}"#);
            then.status(200).json_body(json!({"id": 9, "totalAmount": 30.48}));
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        let input = OrderInput {
            total_amount: rust_decimal::Decimal::new(3048, 2),
            items: Vec::new(),
        };
        let order = client.create_order(&input, "a@b.com").await.unwrap();
        assert_eq!(order.id, pawly_core::OrderId::new(9));
    }

    #[tokio::test]
    async fn test_update_profile_puts_partial_and_returns_raw_body() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/users/profile")
                .query_param("email", "a@b.com")
                .json_body(json!({"name": "New", "phoneNumber": "555"}));
            then.status(200)
                .json_body(json!({"Email": "a@b.com", "Name": "New", "PhoneNumber": "555"}));
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        let updated = client
            .update_profile("a@b.com", &json!({"name": "New", "phoneNumber": "555"}))
            .await
            .unwrap();
        assert_eq!(updated["Name"], json!("New"));
    }

    #[tokio::test]
    async fn test_update_appointment_status_puts_status_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/appointments/4/status")
                .json_body(json!({"status": "Confirmed"}));
            then.status(204);
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        client
            .update_appointment_status(AppointmentId::new(4), "Confirmed")
            .await
            .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn test_create_post_invalidates_post_list_cache() {
        let server = MockServer::start();
        let list_mock = server.mock(|when, then| {
            when.method(GET).path("/api/blog");
            then.status(200)
                .json_body(json!([{"id": 1, "title": "Caring for senior dogs"}]));
        });
        let _create = server.mock(|when, then| {
            when.method(POST).path("/api/blog");
            then.status(200)
                .json_body(json!({"id": 2, "title": "Kitten basics"}));
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        client.get_posts().await.unwrap();
        client.get_posts().await.unwrap();
        assert_eq!(list_mock.calls(), 1);

        let input = NewBlogPost {
            title: "Kitten basics".to_owned(),
            content: "Start with patience.".to_owned(),
            excerpt: None,
            author: Some("Pawly Team".to_owned()),
            image: None,
            category: Some("Health".to_owned()),
        };
        client.create_post(&input).await.unwrap();

        client.get_posts().await.unwrap();
        assert_eq!(list_mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_approve_adoption_puts_and_succeeds() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/api/pets/12/approve");
            then.status(200);
        });

        let client = ApiClient::new(format!("{}/api", server.base_url()));
        client.approve_adoption(PetId::new(12)).await.unwrap();
        mock.assert();
    }
}
