//! Внешний API движка баккара (in-process, без сети).
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (ставки, раздача, авто-плей);
//! - запросы (queries.rs) — только чтение (сессия, история, табло, статистика);
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
