use crate::auth::Session;
use crate::model::{self, Launch as ModelLaunch, User as ModelUser};
use async_graphql::{Context, Enum, ID, Object, SimpleObject};

use super::schema::app_state;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PatchSize {
    Small,
    Large,
}

impl From<model::PatchSize> for PatchSize {
    fn from(s: model::PatchSize) -> Self {
        match s {
            model::PatchSize::Small => PatchSize::Small,
            model::PatchSize::Large => PatchSize::Large,
        }
    }
}

impl From<PatchSize> for model::PatchSize {
    fn from(s: PatchSize) -> Self {
        match s {
            PatchSize::Small => model::PatchSize::Small,
            PatchSize::Large => model::PatchSize::Large,
        }
    }
}

pub struct Launch(pub ModelLaunch);

impl From<ModelLaunch> for Launch {
    fn from(l: ModelLaunch) -> Self {
        Self(l)
    }
}

#[Object]
impl Launch {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn site(&self) -> Option<String> {
        self.0.site.clone()
    }

    async fn mission(&self) -> Option<Mission> {
        self.0.mission.clone().map(Mission)
    }

    async fn rocket(&self) -> Option<Rocket> {
        self.0.rocket.clone().map(Rocket::from)
    }

    /// Whether the logged-in user has booked this launch
    async fn is_booked(&self, ctx: &Context<'_>) -> async_graphql::Result<bool> {
        let Some(email) = ctx.data_opt::<Session>().and_then(Session::email) else {
            return Ok(false);
        };
        let state = app_state(ctx)?;
        Ok(state
            .users
            .find_by_email(email)
            .await
            .is_some_and(|u| u.is_booked_on(&self.0.id)))
    }
}

#[derive(SimpleObject)]
pub struct Rocket {
    pub id: ID,
    pub name: Option<String>,
    #[graphql(name = "type")]
    pub rocket_type: Option<String>,
}

impl From<model::Rocket> for Rocket {
    fn from(r: model::Rocket) -> Self {
        Self {
            id: ID(r.id),
            name: r.name,
            rocket_type: r.rocket_type,
        }
    }
}

pub struct Mission(pub model::Mission);

#[Object]
impl Mission {
    async fn name(&self) -> Option<String> {
        self.0.name.clone()
    }

    /// URL of the mission patch image; large unless `size` says otherwise
    async fn mission_patch(&self, size: Option<PatchSize>) -> Option<String> {
        let size = size.map(model::PatchSize::from).unwrap_or_default();
        self.0.patch(size).map(str::to_string)
    }
}

pub struct User(pub ModelUser);

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self(u)
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    /// Booked launches, in booking order
    async fn trips(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Option<Launch>>> {
        let state = app_state(ctx)?;
        Ok(state
            .catalog
            .get_many(&self.0.trips)
            .into_iter()
            .map(|l| Some(l.into()))
            .collect())
    }

    async fn token(&self) -> Option<&str> {
        self.0.token.as_deref()
    }
}

#[derive(SimpleObject)]
pub struct TripUpdateResponse {
    pub success: bool,
    pub message: Option<String>,
    pub launches: Option<Vec<Option<Launch>>>,
}

impl TripUpdateResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            launches: None,
        }
    }
}

/// Simple wrapper around our list of launches that contains a cursor to the
/// last item in the list. Pass this cursor to the launches query to fetch results
/// after these.
#[derive(SimpleObject)]
pub struct LaunchConnection {
    pub cursor: String,
    pub has_more: bool,
    pub launches: Vec<Option<Launch>>,
}
