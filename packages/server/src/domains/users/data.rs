use juniper::GraphQLObject;
use uuid::Uuid;

use crate::common::PageInfo;
use crate::domains::users::models::User;

/// GraphQL view of a user. The password digest stays in the model layer and
/// never appears here.
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A registered user")]
pub struct UserData {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_uuid(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A user within a paginated listing")]
pub struct UserEdge {
    pub node: UserData,
    pub cursor: String,
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A page of users")]
pub struct UserConnection {
    pub edges: Vec<UserEdge>,
    pub page_info: PageInfo,
    pub total_count: i32,
}
