use crate::entities::Item;
use crate::errors::ApiError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

pub const MIN_PRICE: Decimal = Decimal::ONE;
pub const MAX_PRICE: Decimal = Decimal::ONE_THOUSAND;

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("name_blank");
        err.message = Some("name must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Price must lie in [1, 1000], both ends inclusive.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < MIN_PRICE || *price > MAX_PRICE {
        let mut err = ValidationError::new("price_range");
        err.message = Some("price must be between 1 and 1000".into());
        return Err(err);
    }
    Ok(())
}

/// Validated mutable fields of an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl ItemDetails {
    fn from_parts(
        name: Option<String>,
        description: Option<String>,
        price: Option<Decimal>,
    ) -> Result<Self, ApiError> {
        match (name, price) {
            (Some(name), Some(price)) => Ok(Self {
                name,
                description,
                price,
            }),
            (name, price) => Err(missing_fields(name.is_none(), price.is_none()).into()),
        }
    }
}

/// Field errors for absent required fields, in the shape `validate()` reports them.
fn missing_fields(name: bool, price: bool) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if name {
        errors.add("name", ValidationError::new("required"));
    }
    if price {
        errors.add("price", ValidationError::new("required"));
    }
    errors
}

/// Request body for `POST /items`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[validate(required, custom = "validate_name")]
    #[schema(example = "Potion")]
    pub name: Option<String>,
    #[schema(example = "Restores a small amount of HP")]
    pub description: Option<String>,
    #[validate(required, custom = "validate_price")]
    #[schema(value_type = f64, minimum = 1, maximum = 1000, example = 9)]
    pub price: Option<Decimal>,
}

impl CreateItemRequest {
    /// Runs field validation and unpacks the request.
    pub fn into_details(self) -> Result<ItemDetails, ApiError> {
        self.validate()?;
        ItemDetails::from_parts(self.name, self.description, self.price)
    }
}

/// Request body for `PUT /items/{id}`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[validate(required, custom = "validate_name")]
    #[schema(example = "Hi-Potion")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required, custom = "validate_price")]
    #[schema(value_type = f64, minimum = 1, maximum = 1000, example = 25)]
    pub price: Option<Decimal>,
}

impl UpdateItemRequest {
    pub fn into_details(self) -> Result<ItemDetails, ApiError> {
        self.validate()?;
        ItemDetails::from_parts(self.name, self.description, self.price)
    }
}

/// Query string accepted by `GET /items`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemListQuery {
    /// Case-insensitive substring matched against item names
    pub name: Option<String>,
}

impl ItemListQuery {
    /// Builds the query from raw query-string pairs. The first `name` wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            name: pairs
                .into_iter()
                .find(|(key, _)| key == "name")
                .map(|(_, value)| value),
        }
    }
}

/// Wire representation of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 9)]
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            created_date: item.created_date,
        }
    }
}
