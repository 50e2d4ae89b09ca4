use crate::error::Result;
use crate::http::ApiClient;
use crate::types::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, Message, Profile, ProfileUpdate,
    RegisterRequest, ResetPasswordRequest,
};

pub struct AuthApi<'a> {
    pub(crate) api: &'a ApiClient,
}

impl AuthApi<'_> {
    /// Authenticates and installs the returned credential in the session
    /// store in one step.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self.api.post("/auth/login", &body).await?;
        self.api.session().login(&resp.access_token, resp.name.as_deref())?;
        Ok(resp)
    }

    /// Registers a new account and logs it in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let body = RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self.api.post("/auth/register", &body).await?;
        self.api.session().login(&resp.access_token, resp.name.as_deref())?;
        Ok(resp)
    }

    pub async fn forgot_password(&self, email: &str) -> Result<Message> {
        let body = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        self.api.post("/auth/forgot-password", &body).await
    }

    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> Result<Message> {
        let body = ResetPasswordRequest {
            access_token: reset_token.to_string(),
            new_password: new_password.to_string(),
        };
        self.api.post("/auth/reset-password", &body).await
    }

    pub async fn profile(&self) -> Result<Profile> {
        self.api.get("/perfil").await
    }

    /// Updates the profile server-side and mirrors the new display name into
    /// the session.
    pub async fn update_profile(&self, name: &str) -> Result<Profile> {
        let body = ProfileUpdate {
            name: name.trim().to_string(),
        };
        let profile: Profile = self.api.put("/perfil", &body).await?;
        self.api.session().update_display_name(&profile.name)?;
        Ok(profile)
    }

    /// Drops the local session. Purely client-side.
    pub fn logout(&self) -> Result<()> {
        self.api.session().logout()
    }
}
