use calenduh_api::Application;
use calenduh_infra::CalenduhContext;
use calenduh_sdk::{CalenduhSDK, RegisterInput, User};

pub struct TestApp {
    /// Shares the repositories with the running server
    pub ctx: CalenduhContext,
    pub address: String,
}

impl TestApp {
    /// Registers a new user and returns an sdk authenticated as that user
    pub async fn register(&self, username: &str) -> (CalenduhSDK, User) {
        let res = CalenduhSDK::new(self.address.clone())
            .auth
            .register(RegisterInput {
                username: username.into(),
                password: format!("{}-password", username),
                email: None,
            })
            .await
            .expect("Expected to register user");

        let sdk = CalenduhSDK::with_session(self.address.clone(), res.session.session_id);
        (sdk, res.user)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, CalenduhSDK) {
    let mut ctx = CalenduhContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = CalenduhSDK::new(address.clone());
    (TestApp { ctx, address }, sdk)
}
