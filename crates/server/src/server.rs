use axum::{Router, routing::get};

use std::sync::Arc;

use crate::{compliance, statistics, transactions};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Build the `/transactions` query API over `engine`.
pub fn router(engine: Arc<Engine>) -> Router {
    let state = ServerState { engine };

    let queries = Router::new()
        .route("/totalAmount", get(statistics::total_amount))
        .route("/totalAmountSentBy", get(statistics::total_amount_sent_by))
        .route("/maxAmount", get(statistics::max_amount))
        .route("/uniqueClientsCount", get(statistics::unique_clients_count))
        .route("/topSender", get(statistics::top_sender))
        .route(
            "/hasOpenComplianceIssues",
            get(compliance::has_open_compliance_issues),
        )
        .route("/unsolvedIssueIds", get(compliance::unsolved_issue_ids))
        .route(
            "/solvedIssueMessages",
            get(compliance::solved_issue_messages),
        )
        .route(
            "/transactionsByBeneficiaryName",
            get(transactions::by_beneficiary_name),
        )
        .route(
            "/top3TransactionsByAmount",
            get(transactions::top3_by_amount),
        );

    Router::new()
        .nest("/transactions", queries)
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine))).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
