use serde::{Deserialize, Serialize};

use crate::engine::GameSession;
use crate::history::StatsWindow;
use crate::infra::mapping::{outcome_to_dto, session_to_dto, streak_page};

use super::dto::{RoundOutcomeDto, SessionViewDto, StatsDto, StreakPageDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Текущее состояние сессии.
    GetSession,

    /// История от новых к старым; `limit = None` — вся.
    GetHistory { limit: Option<usize> },

    /// Страница табло серий. `page_size = None` — из конфига,
    /// `page = None` — последняя страница.
    GetStreakColumns {
        page_size: Option<usize>,
        page: Option<usize>,
    },

    /// Статистика по окну последних раундов.
    GetStats { window: StatsWindow },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Session(SessionViewDto),
    History(Vec<RoundOutcomeDto>),
    StreakPage(StreakPageDto),
    Stats(StatsDto),
}

pub fn answer_query(session: &GameSession, query: Query) -> QueryResponse {
    match query {
        Query::GetSession => QueryResponse::Session(session_to_dto(session)),

        Query::GetHistory { limit } => QueryResponse::History(
            session
                .history()
                .newest_first()
                .take(limit.unwrap_or(usize::MAX))
                .map(outcome_to_dto)
                .collect(),
        ),

        Query::GetStreakColumns { page_size, page } => {
            let config = session.config();
            let board = session.history().streak_board(
                config.streak_rows,
                page_size.unwrap_or(config.streak_columns_per_page),
            );
            QueryResponse::StreakPage(streak_page(&board, page))
        }

        Query::GetStats { window } => {
            let stats = *session.history().stats();
            QueryResponse::Stats(StatsDto {
                session: stats,
                net_result: stats.net_result(),
                window: session.window_stats(window),
            })
        }
    }
}
