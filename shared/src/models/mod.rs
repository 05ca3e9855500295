//! Collection record models
//!
//! One module per backend collection. Records are plain serde structs and
//! treat backend fields by name; nothing here validates schema beyond what
//! deserialization requires.

pub mod chat;
pub mod order;
pub mod product;
pub mod profile;
pub mod role_request;

pub use chat::{ChatHistory, ChatMessage};
pub use order::{Order, OrderItem, OrderStatus};
pub use product::{Product, StockLevel};
pub use profile::UserProfile;
pub use role_request::{RoleRequest, RoleRequestList, RoleRequestStatus};
