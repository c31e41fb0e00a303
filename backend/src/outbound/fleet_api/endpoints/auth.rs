//! Authentication and profile calls.

use pagination::Envelope;
use reqwest::Method;
use tracing::info;

use super::Ack;
use crate::outbound::fleet_api::{CallOutcome, FleetClient};
use crate::models::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponseData,
    ResetPasswordRequest, SignupRequest, UpdateProfileRequest, User,
};

impl FleetClient {
    /// `POST /auth/login`. A successful envelope carrying data replaces the
    /// stored session.
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> CallOutcome<Envelope<LoginResponseData>> {
        let request = LoginRequest {
            identifier: identifier.to_owned(),
            password: password.to_owned(),
        };
        let outcome = self.send_json(Method::POST, "/auth/login", &request).await;
        if let CallOutcome::Success(Envelope {
            success: true,
            data: Some(login),
            ..
        }) = &outcome
        {
            self.session().handle_login(login);
            info!(user_id = login.user.id, "session started");
        }
        outcome
    }

    /// `POST /auth/signup`.
    pub async fn signup(&self, request: &SignupRequest) -> CallOutcome<Envelope<User>> {
        self.send_json(Method::POST, "/auth/signup", request).await
    }

    /// `POST /auth/forgot-password`.
    pub async fn forgot_password(&self, email: &str) -> CallOutcome<Ack> {
        let request = ForgotPasswordRequest {
            email: email.to_owned(),
        };
        self.send_json(Method::POST, "/auth/forgot-password", &request)
            .await
    }

    /// `POST /auth/reset-password`.
    pub async fn reset_password(&self, token: &str, password: &str) -> CallOutcome<Ack> {
        let request = ResetPasswordRequest {
            token: token.to_owned(),
            password: password.to_owned(),
        };
        self.send_json(Method::POST, "/auth/reset-password", &request)
            .await
    }

    /// Drop the stored token and user. No network call.
    pub fn logout(&self) {
        self.session().clear();
        info!("session cleared");
    }

    /// Whether a token is stored.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session().is_authenticated()
    }

    /// User saved at login, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session().current_user()
    }

    /// `GET /profile`.
    pub async fn profile(&self) -> CallOutcome<Envelope<User>> {
        self.get("/profile", &[]).await
    }

    /// `PUT /profile`.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> CallOutcome<Envelope<User>> {
        self.send_json(Method::PUT, "/profile", request).await
    }

    /// `POST /profile/change-password`.
    pub async fn change_password(&self, current: &str, new: &str) -> CallOutcome<Ack> {
        let request = ChangePasswordRequest {
            current_password: current.to_owned(),
            new_password: new.to_owned(),
        };
        self.send_json(Method::POST, "/profile/change-password", &request)
            .await
    }
}
