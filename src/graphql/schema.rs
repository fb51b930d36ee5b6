use std::path::Path;
use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Request, Response, Schema};

use crate::auth::{self, Session};
use crate::config::LaunchpadConfig;
use crate::error::Result;
use crate::pagination;
use crate::store::{LaunchCatalog, UserStore};
use crate::validation;

use super::types::*;

pub type LaunchpadSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub config: LaunchpadConfig,
    pub catalog: LaunchCatalog,
    pub users: UserStore,
}

impl AppState {
    pub fn new(config: LaunchpadConfig, catalog: LaunchCatalog, users: UserStore) -> Self {
        Self {
            config,
            catalog,
            users,
        }
    }

    /// Build state from config: catalog file or built-in, snapshot or in-memory users.
    pub fn load(config: LaunchpadConfig, project_root: &Path) -> Result<Self> {
        let catalog = LaunchCatalog::load(&config, project_root)?;
        let users = match config.users_path(project_root) {
            Some(path) => UserStore::open(&path)?,
            None => UserStore::in_memory(),
        };
        Ok(Self::new(config, catalog, users))
    }
}

pub fn build_schema(state: Arc<AppState>) -> LaunchpadSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// SDL of the schema; needs no data since nothing is resolved.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// Execute a request on behalf of whoever `token` belongs to.
pub async fn execute_with_token(
    schema: &LaunchpadSchema,
    state: &AppState,
    request: Request,
    token: Option<&str>,
) -> Response {
    let session = Session::from_authorization(token, &state.users).await;
    schema.execute(request.data(session)).await
}

pub(crate) fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

fn session_email<'a>(ctx: &Context<'a>) -> Option<&'a str> {
    ctx.data_opt::<Session>().and_then(Session::email)
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Fetch a page of launches, newest first
    async fn launches(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The number of results to show. Must be >= 1. Default = 20")]
        page_size: Option<i32>,
        #[graphql(
            desc = "If you add a cursor here, it will only return results _after_ this cursor"
        )]
        after: Option<String>,
    ) -> async_graphql::Result<LaunchConnection> {
        let state = app_state(ctx)?;
        let page_size = match page_size {
            Some(n) => usize::try_from(n).unwrap_or(0),
            None => state.config.data.page_size,
        };

        let page = pagination::paginate(
            state.catalog.all(),
            page_size,
            after.as_deref(),
            |l| l.id.as_str(),
        )?;

        Ok(LaunchConnection {
            cursor: page.cursor,
            has_more: page.has_more,
            launches: page.items.into_iter().map(|l| Some(l.into())).collect(),
        })
    }

    /// Fetch a specific launch by its ID
    async fn launch(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Launch>> {
        let state = app_state(ctx)?;
        Ok(state.catalog.get(&id).cloned().map(Launch::from))
    }

    /// The logged-in user, if any
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let Some(email) = session_email(ctx) else {
            return Ok(None);
        };
        let state = app_state(ctx)?;
        Ok(state.users.find_by_email(email).await.map(User::from))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Book launches for the logged-in user
    async fn book_trips(
        &self,
        ctx: &Context<'_>,
        launch_ids: Vec<Option<ID>>,
    ) -> async_graphql::Result<TripUpdateResponse> {
        let Some(email) = session_email(ctx) else {
            return Ok(TripUpdateResponse::failure(
                "you must be logged in to book trips",
            ));
        };
        let state = app_state(ctx)?;

        let mut bookable = Vec::new();
        let mut rejected = Vec::new();
        for id in launch_ids {
            match id {
                Some(id) if state.catalog.contains(&id) => bookable.push(id.0),
                Some(id) => rejected.push(id.0),
                None => rejected.push("null".to_string()),
            }
        }

        if !bookable.is_empty() {
            state.users.book_trips(email, &bookable).await?;
        }
        let launches: Vec<Option<Launch>> = state
            .catalog
            .get_many(&bookable)
            .into_iter()
            .map(|l| Some(l.into()))
            .collect();

        let success = rejected.is_empty();
        let message = if success {
            "trips booked successfully".to_string()
        } else {
            format!(
                "the following launches couldn't be booked: {}",
                rejected.join(", ")
            )
        };

        Ok(TripUpdateResponse {
            success,
            message: Some(message),
            launches: Some(launches),
        })
    }

    /// Cancel a previously booked launch for the logged-in user
    async fn cancel_trip(
        &self,
        ctx: &Context<'_>,
        launch_id: ID,
    ) -> async_graphql::Result<TripUpdateResponse> {
        let Some(email) = session_email(ctx) else {
            return Ok(TripUpdateResponse::failure(
                "you must be logged in to cancel trips",
            ));
        };
        let state = app_state(ctx)?;

        if !state.users.cancel_trip(email, &launch_id).await? {
            return Ok(TripUpdateResponse::failure("failed to cancel trip"));
        }

        let launch = state.catalog.get(&launch_id).cloned().map(Launch::from);
        Ok(TripUpdateResponse {
            success: true,
            message: Some("trip cancelled".to_string()),
            launches: Some(vec![launch]),
        })
    }

    /// Log in by email, creating the user on first login
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: Option<String>,
    ) -> async_graphql::Result<Option<User>> {
        let Some(email) = email.map(|e| e.trim().to_string()) else {
            return Ok(None);
        };
        if let Err(e) = validation::validate_email(&email) {
            tracing::debug!(error = %e, "Rejecting login");
            return Ok(None);
        }

        let state = app_state(ctx)?;
        state.users.find_or_create(&email).await?;
        let user = state
            .users
            .set_token(&email, auth::issue_token(&email))
            .await?;
        tracing::info!(id = user.id, "User logged in");
        Ok(Some(user.into()))
    }
}
