use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::get_status::{
    GetProductStatusParams, GetProductStatusUseCase,
};
use business::domain::product::use_cases::list_all::ListAllProductsUseCase;
use business::domain::product::use_cases::purchase::{
    PurchaseProductParams, PurchaseProductUseCase,
};
use business::domain::product::use_cases::restock::{RestockProductParams, RestockProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, InventoryResponse, ProductCreatedResponse, ProductStatusResponse,
    PurchaseRequest, StockUpdateResponse, inventory_response,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_status_use_case: Arc<dyn GetProductStatusUseCase>,
    list_all_use_case: Arc<dyn ListAllProductsUseCase>,
    purchase_use_case: Arc<dyn PurchaseProductUseCase>,
    restock_use_case: Arc<dyn RestockProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_status_use_case: Arc<dyn GetProductStatusUseCase>,
        list_all_use_case: Arc<dyn ListAllProductsUseCase>,
        purchase_use_case: Arc<dyn PurchaseProductUseCase>,
        restock_use_case: Arc<dyn RestockProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_status_use_case,
            list_all_use_case,
            purchase_use_case,
            restock_use_case,
        }
    }
}

/// Inventory API
///
/// Endpoints for registering products, checking stock, purchasing and restocking.
#[OpenApi]
impl ProductApi {
    /// Register a new product
    ///
    /// High priority products get a minimum threshold of at least 10.
    /// The volume category is derived from the restock quantity.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            product_id: body.0.product_id,
            name: body.0.name,
            stock_quantity: body.0.stock_quantity,
            min_threshold: body.0.min_threshold,
            restock_quantity: body.0.restock_quantity,
            priority: body.0.priority.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Ok(Json(ProductCreatedResponse {
                message: "Product added".to_string(),
                product: product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the stock status of a product
    ///
    /// High priority products below their threshold are restocked once
    /// before the status is computed, and always report "ok".
    #[oai(
        path = "/products/:id/status",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_product_status(&self, id: Path<String>) -> GetProductStatusResponse {
        match self
            .get_status_use_case
            .execute(GetProductStatusParams { product_id: id.0 })
            .await
        {
            Ok(report) => GetProductStatusResponse::Ok(Json(report.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductStatusResponse::NotFound(json),
                    _ => GetProductStatusResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns the stored inventory keyed by product id, without restocking.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self) -> ListProductsResponse {
        match self.list_all_use_case.execute().await {
            Ok(inventory) => ListProductsResponse::Ok(Json(inventory_response(inventory))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Purchase units of a product
    ///
    /// High priority products are restocked once if the purchase leaves
    /// them below their threshold.
    #[oai(
        path = "/products/:id/purchase",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn purchase_product(
        &self,
        id: Path<String>,
        body: Json<PurchaseRequest>,
    ) -> PurchaseProductResponse {
        let params = PurchaseProductParams {
            product_id: id.0,
            quantity: body.0.quantity,
        };

        match self.purchase_use_case.execute(params).await {
            Ok(updated_stock) => PurchaseProductResponse::Ok(Json(StockUpdateResponse {
                message: "Purchase successful".to_string(),
                updated_stock,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PurchaseProductResponse::BadRequest(json),
                    404 => PurchaseProductResponse::NotFound(json),
                    _ => PurchaseProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Manually restock a low priority product
    ///
    /// High priority products are only restocked automatically.
    #[oai(
        path = "/products/:id/restock",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn restock_product(&self, id: Path<String>) -> RestockProductResponse {
        match self
            .restock_use_case
            .execute(RestockProductParams { product_id: id.0 })
            .await
        {
            Ok(updated_stock) => RestockProductResponse::Ok(Json(StockUpdateResponse {
                message: "Manual restock successful".to_string(),
                updated_stock,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RestockProductResponse::BadRequest(json),
                    404 => RestockProductResponse::NotFound(json),
                    _ => RestockProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductCreatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductStatusResponse {
    #[oai(status = 200)]
    Ok(Json<ProductStatusResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<InventoryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PurchaseProductResponse {
    #[oai(status = 200)]
    Ok(Json<StockUpdateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RestockProductResponse {
    #[oai(status = 200)]
    Ok(Json<StockUpdateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
