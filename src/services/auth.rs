// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;

use crate::{
    common::{error::AppError, money::checked_amount},
    db::{user_repo::NewUser, FinanceRepository, UserRepository},
    models::{
        auth::{Claims, OnboardingPayload, User},
        finance::GoalPeriod,
    },
};

const TOKEN_TTL_DAYS: i64 = 1;
const INITIAL_GOAL_DESCRIPTION: &str = "Meta mensal de faturamento";

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    finance_repo: FinanceRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        finance_repo: FinanceRepository,
        jwt_secret: String,
        pool: PgPool,
    ) -> Self {
        Self { user_repo, finance_repo, jwt_secret, pool }
    }

    /// Cria o dono do negócio e, se informado, a meta mensal inicial.
    pub async fn onboard(&self, payload: &OnboardingPayload) -> Result<User, AppError> {
        let monthly_goal = checked_amount(payload.monthly_goal, "monthlyGoal")?;

        // Hash fora da transação, não toca no banco
        let password = payload.password.clone();
        let hashed_password = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let mut tx = self.pool.begin().await?;

        let user = self
            .user_repo
            .create_user(
                &mut *tx,
                NewUser {
                    nome: payload.full_name.trim(),
                    email: payload.email.trim(),
                    senha_hash: &hashed_password,
                    nome_negocio: payload.business_name.as_deref(),
                    faturamento_mensal: monthly_goal,
                    principais_metas: payload.business_goals.as_deref(),
                    cor_app: payload.app_color.as_deref(),
                },
            )
            .await?;

        if let Some(goal) = monthly_goal.filter(|g| !g.is_zero()) {
            self.finance_repo
                .create_meta(&mut *tx, user.id, INITIAL_GOAL_DESCRIPTION, goal, GoalPeriod::Monthly)
                .await?;
        }

        tx.commit().await?;

        tracing::info!("Novo cadastro: usuário {}", user.id);
        Ok(user)
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_email(email.trim())
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password = password.to_owned();
        let password_hash = user.senha_hash.clone();

        let is_password_valid = tokio::task::spawn_blocking(move || verify(&password, &password_hash))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.issue_token(user.id)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub fn issue_token(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
