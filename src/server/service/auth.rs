use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Claims read from the identity provider's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    /// Stable subject identifier.
    pub sub: String,
    pub name: Option<String>,
    pub preferred_username: Option<String>,
}

impl UserInfo {
    /// Best available display name, falling back to the subject.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .or(self.preferred_username.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.sub)
            .to_string()
    }
}

/// Service for the OAuth2 authorization-code login flow.
///
/// Exchanges codes for tokens, reads the user's identity and keeps the local user
/// record in sync with it.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Identity provider endpoint returning the logged-in user's claims.
    pub userinfo_url: &'a str,
    /// Subject granted admin on login, used to bootstrap the first moderator.
    pub initial_admin_subject: Option<&'a str>,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
        initial_admin_subject: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            initial_admin_subject,
        }
    }

    /// Generates a login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Handles the OAuth2 callback and signs the user in.
    ///
    /// Exchanges the authorization code for an access token, fetches the user's claims
    /// and upserts the local user. Admin status is only touched when the subject matches
    /// the configured initial admin; otherwise the stored status is preserved.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from the callback
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with updated information
    /// - `Err(AppError::AuthErr(TokenExchangeFailed))` - The provider rejected the code
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the userinfo claims
    /// - `Err(AppError::DbErr)` - Database error during user upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchangeFailed(err.to_string()))?;

        let user_info = self.fetch_user_info(&token).await?;

        let grant_admin = self
            .initial_admin_subject
            .is_some_and(|subject| subject == user_info.sub);

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                name: user_info.display_name(),
                subject: user_info.sub,
                is_admin: grant_admin.then_some(true),
            })
            .await?;

        if grant_admin {
            tracing::info!("User {} has been set as admin", user.name)
        }

        Ok(user)
    }

    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<UserInfo, AppError> {
        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(user_info)
    }
}
