use dosecal_api::Application;
use dosecal_infra::{AppContext, Config, InMemoryCalendarGateway, RealSys, Repos};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub ctx: AppContext,
    pub calendar: Arc<InMemoryCalendarGateway>,
}

// Launch the application as a background task on a random port, wired
// against in-memory stores and the in-memory calendar gateway.
pub async fn spawn_app() -> TestApp {
    let calendar = Arc::new(InMemoryCalendarGateway::new());
    let mut config = Config::new();
    config.port = 0; // Random port
    let ctx = AppContext {
        repos: Repos::create_inmemory(),
        config,
        sys: Arc::new(RealSys {}),
        calendar: calendar.clone(),
    };

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");
    let address = format!("http://localhost:{}/api/v1", application.port());

    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        address,
        ctx,
        calendar,
    }
}
