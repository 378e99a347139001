use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductListResponse, ProductResponse, UpdateProductRequest,
    product_filter,
};
use crate::api::security::ApiKeyAuth;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Ids that do not parse can never name a stored product.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

fn unknown_product() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("NotFound", "product.not_found"))
}

/// Product catalog API
///
/// Endpoints for listing, creating, updating, and deleting catalog products.
/// Every endpoint requires a valid `X-API-Key` header.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns products in insertion order, optionally narrowed by an exact
    /// `category` match and/or `inStock` (true: stockCount > 0).
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        auth: ApiKeyAuth,
        category: Query<Option<String>>,
        #[oai(name = "inStock")] in_stock: Query<Option<String>>,
    ) -> ListProductsResponse {
        tracing::debug!(client = %auth.0, "list products");
        let params = ListProductsParams {
            filter: product_filter(category.0, in_stock.0),
        };

        match self.list_use_case.execute(params).await {
            Ok(products) => ListProductsResponse::Ok(Json(ProductListResponse {
                products: products.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its unique identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, auth: ApiKeyAuth, id: Path<String>) -> GetProductResponse {
        tracing::debug!(client = %auth.0, id = %id.0, "get product");
        let Some(uuid) = parse_id(&id.0) else {
            return GetProductResponse::NotFound(unknown_product());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new product
    ///
    /// Requires `name`, `price`, `category` and `stockCount`. Returns the
    /// stored record including its generated `id`.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: ApiKeyAuth,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        tracing::debug!(client = %auth.0, "create product");

        match self.create_use_case.execute(body.0.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Applies only the supplied fields; everything else keeps its value.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: ApiKeyAuth,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        tracing::debug!(client = %auth.0, id = %id.0, "update product");
        let Some(uuid) = parse_id(&id.0) else {
            return UpdateProductResponse::NotFound(unknown_product());
        };

        match self.update_use_case.execute(body.0.into_params(uuid)).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product from the catalog. Responds with an
    /// empty 204; the id is unresolvable afterwards.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: ApiKeyAuth, id: Path<String>) -> DeleteProductResponse {
        tracing::debug!(client = %auth.0, id = %id.0, "delete product");
        let Some(uuid) = parse_id(&id.0) else {
            return DeleteProductResponse::NotFound(unknown_product());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::Endpoint;
    use poem::http::StatusCode;
    use poem::middleware::Cors;
    use poem::test::{TestClient, TestResponse};
    use serde_json::{Value, json};

    use crate::config::api_key_config::ApiKeyConfig;
    use crate::setup::dependency_injection::DependencyContainer;
    use crate::setup::server::Server;

    const API_KEY: &str = "test-api-key";

    fn client() -> TestClient<impl Endpoint> {
        let app = Server::app(
            DependencyContainer::in_memory(),
            ApiKeyConfig::new(API_KEY).unwrap(),
            Cors::new(),
            "http://localhost/api".to_string(),
        );
        TestClient::new(app)
    }

    async fn body(resp: TestResponse) -> Value {
        resp.0.into_body().into_json().await.unwrap()
    }

    fn smart_watch() -> Value {
        json!({
            "name": "Smart Watch",
            "price": 199.99,
            "category": "electronics",
            "stockCount": 15,
        })
    }

    async fn create(cli: &TestClient<impl Endpoint>, payload: Value) -> Value {
        let resp = cli
            .post("/api/products")
            .header("X-API-Key", API_KEY)
            .body_json(&payload)
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        body(resp).await
    }

    async fn list(cli: &TestClient<impl Endpoint>, uri: &str) -> Vec<Value> {
        let resp = cli.get(uri).header("X-API-Key", API_KEY).send().await;
        resp.assert_status_is_ok();
        body(resp).await["products"].as_array().unwrap().clone()
    }

    #[tokio::test]
    async fn should_return_401_on_every_route_without_api_key() {
        let cli = client();
        let id = "00000000-0000-0000-0000-000000000000";

        let responses = vec![
            cli.get("/api/products").send().await,
            cli.get("/api/products?category=electronics").send().await,
            cli.get(format!("/api/products/{id}")).send().await,
            cli.post("/api/products").body_json(&smart_watch()).send().await,
            cli.put(format!("/api/products/{id}"))
                .body_json(&json!({ "price": 1.0 }))
                .send()
                .await,
            cli.delete(format!("/api/products/{id}")).send().await,
        ];

        for resp in responses {
            resp.assert_status(StatusCode::UNAUTHORIZED);
            let json = body(resp).await;
            assert_eq!(json["name"], "AuthenticationError");
            assert!(json.get("error").is_some());
        }
    }

    #[tokio::test]
    async fn should_return_401_when_api_key_is_wrong() {
        let cli = client();

        let resp = cli
            .post("/api/products")
            .header("X-API-Key", "not-the-key")
            .body_json(&smart_watch())
            .send()
            .await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
        assert!(list(&cli, "/api/products").await.is_empty());
    }

    #[tokio::test]
    async fn should_list_products_with_valid_api_key() {
        let cli = client();

        let resp = cli
            .get("/api/products")
            .header("X-API-Key", API_KEY)
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = body(resp).await;
        assert!(json["products"].is_array());
    }

    #[tokio::test]
    async fn should_create_product_with_generated_id() {
        let cli = client();

        let created = create(&cli, smart_watch()).await;

        assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(created["name"], "Smart Watch");
        assert_eq!(created["price"], 199.99);
        assert_eq!(created["category"], "electronics");
        assert_eq!(created["stockCount"], 15);
        assert_eq!(created["inStock"], true);

        let other = create(&cli, smart_watch()).await;
        assert_ne!(created["id"], other["id"]);
    }

    #[tokio::test]
    async fn should_return_400_and_persist_nothing_when_fields_missing() {
        let cli = client();

        let resp = cli
            .post("/api/products")
            .header("X-API-Key", API_KEY)
            .body_json(&json!({}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = body(resp).await;
        assert_eq!(json["name"], "ValidationError");
        assert_eq!(json["error"], "product.name_required");

        let resp = cli
            .post("/api/products")
            .header("X-API-Key", API_KEY)
            .body_json(&json!({ "name": "Smart Watch", "price": 10.0, "category": "electronics" }))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["error"], "product.stock_count_required");

        assert!(list(&cli, "/api/products").await.is_empty());
    }

    #[tokio::test]
    async fn should_return_400_with_error_body_for_malformed_payload() {
        let cli = client();

        let resp = cli
            .post("/api/products")
            .header("X-API-Key", API_KEY)
            .body_json(&json!({ "name": "Smart Watch", "price": "cheap", "category": "x", "stockCount": 1 }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert!(body(resp).await.get("error").is_some());
    }

    #[tokio::test]
    async fn should_reject_negative_price_and_stock() {
        let cli = client();

        let mut payload = smart_watch();
        payload["price"] = json!(-1.0);
        let resp = cli
            .post("/api/products")
            .header("X-API-Key", API_KEY)
            .body_json(&payload)
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["error"], "product.price_invalid");

        let mut payload = smart_watch();
        payload["stockCount"] = json!(-2);
        let resp = cli
            .post("/api/products")
            .header("X-API-Key", API_KEY)
            .body_json(&payload)
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["error"], "product.stock_count_invalid");
    }

    #[tokio::test]
    async fn should_filter_by_category_and_in_stock() {
        let cli = client();
        create(&cli, smart_watch()).await;
        create(
            &cli,
            json!({ "name": "Cookbook", "price": 24.5, "category": "books", "stockCount": 0 }),
        )
        .await;
        create(
            &cli,
            json!({ "name": "Headphones", "price": 89, "category": "electronics", "stockCount": 0 }),
        )
        .await;

        let electronics = list(&cli, "/api/products?category=electronics").await;
        assert_eq!(electronics.len(), 2);
        assert!(electronics.iter().all(|p| p["category"] == "electronics"));

        let in_stock = list(&cli, "/api/products?inStock=true").await;
        assert_eq!(in_stock.len(), 1);
        assert!(in_stock.iter().all(|p| p["stockCount"].as_u64().unwrap() > 0));

        let sold_out = list(&cli, "/api/products?inStock=false&category=electronics").await;
        assert_eq!(sold_out.len(), 1);
        assert_eq!(sold_out[0]["name"], "Headphones");

        let none = list(&cli, "/api/products?category=garden").await;
        assert!(none.is_empty());

        let ignored = list(&cli, "/api/products?inStock=perhaps&colour=red").await;
        assert_eq!(ignored.len(), 3);
        assert_eq!(ignored[0]["name"], "Smart Watch");
        assert_eq!(ignored[2]["name"], "Headphones");
    }

    #[tokio::test]
    async fn should_run_full_product_lifecycle() {
        let cli = client();
        let created = create(&cli, smart_watch()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let resp = cli
            .put(format!("/api/products/{id}"))
            .header("X-API-Key", API_KEY)
            .body_json(&json!({ "price": 179.99, "stockCount": 10 }))
            .send()
            .await;
        resp.assert_status_is_ok();
        let updated = body(resp).await;
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["price"], 179.99);
        assert_eq!(updated["stockCount"], 10);
        assert_eq!(updated["name"], "Smart Watch");
        assert_eq!(updated["category"], "electronics");

        let resp = cli
            .get(format!("/api/products/{id}"))
            .header("X-API-Key", API_KEY)
            .send()
            .await;
        resp.assert_status_is_ok();
        assert_eq!(body(resp).await["price"], 179.99);

        let resp = cli
            .delete(format!("/api/products/{id}"))
            .header("X-API-Key", API_KEY)
            .send()
            .await;
        resp.assert_status(StatusCode::NO_CONTENT);
        assert!(resp.0.into_body().into_bytes().await.unwrap().is_empty());

        let resp = cli
            .get(format!("/api/products/{id}"))
            .header("X-API-Key", API_KEY)
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);

        let resp = cli
            .put(format!("/api/products/{id}"))
            .header("X-API-Key", API_KEY)
            .body_json(&json!({ "price": 1.0 }))
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(body(resp).await["error"], "product.not_found");

        let resp = cli
            .delete(format!("/api/products/{id}"))
            .header("X-API-Key", API_KEY)
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);

        assert!(list(&cli, "/api/products").await.is_empty());
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_or_malformed_ids() {
        let cli = client();

        let resp = cli
            .put("/api/products/9999")
            .header("X-API-Key", API_KEY)
            .body_json(&json!({ "price": 100 }))
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);
        assert!(body(resp).await.get("error").is_some());

        let resp = cli
            .delete("/api/products/9999")
            .header("X-API-Key", API_KEY)
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);
        assert!(body(resp).await.get("error").is_some());

        let resp = cli
            .delete(format!("/api/products/{}", uuid::Uuid::new_v4()))
            .header("X-API-Key", API_KEY)
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_invalid_partial_update() {
        let cli = client();
        let created = create(&cli, smart_watch()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let resp = cli
            .put(format!("/api/products/{id}"))
            .header("X-API-Key", API_KEY)
            .body_json(&json!({ "stockCount": -5 }))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);

        let stored = list(&cli, "/api/products").await;
        assert_eq!(stored[0]["stockCount"], 15);
    }

    #[tokio::test]
    async fn should_return_404_for_invalid_update_of_unknown_product() {
        let cli = client();
        create(&cli, smart_watch()).await;

        let resp = cli
            .put(format!("/api/products/{}", uuid::Uuid::new_v4()))
            .header("X-API-Key", API_KEY)
            .body_json(&json!({ "stockCount": -5 }))
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);
        let error = body(resp).await;
        assert_eq!(error["name"], "NotFound");
        assert_eq!(error["error"], "product.not_found");
    }
}
