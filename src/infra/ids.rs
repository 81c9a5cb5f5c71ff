use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use crate::domain::RoundId;

/// Генерация ID на основе монотонных счётчиков.
///
/// Номер раунда идёт в историю, серийник шуза — в `CardId`,
/// так что карты из разных шузов не совпадают по id.
#[derive(Debug)]
pub struct IdGenerator {
    round_counter: AtomicU64,
    shoe_counter: AtomicU32,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            round_counter: AtomicU64::new(1),
            shoe_counter: AtomicU32::new(1),
        }
    }

    /// Генератор для сессии, у которой уже есть шуз с серийником `serial`:
    /// следующий шуз получит `serial + 1`.
    pub fn after_shoe(serial: u32) -> Self {
        Self {
            round_counter: AtomicU64::new(1),
            shoe_counter: AtomicU32::new(serial.saturating_add(1)),
        }
    }

    #[inline]
    pub fn next_round_id(&self) -> RoundId {
        self.round_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_shoe_serial(&self) -> u32 {
        self.shoe_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
