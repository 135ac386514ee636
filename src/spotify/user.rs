use crate::{
    error::Result,
    recommend::TimeRange,
    spotify::SpotifyClient,
    types::{Artist, Paging, PrivateUser},
};

/// Profile of the current user as shown by the `user` command.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub product: String,
    pub followers: u64,
    pub images: Vec<String>,
}

impl From<PrivateUser> for UserProfile {
    fn from(u: PrivateUser) -> Self {
        UserProfile {
            id: u.id,
            display_name: u.display_name.unwrap_or_default(),
            email: u.email.unwrap_or_default(),
            product: u.product.unwrap_or_default(),
            followers: u.followers.total,
            images: u
                .images
                .unwrap_or_default()
                .into_iter()
                .map(|i| i.url)
                .collect(),
        }
    }
}

pub async fn current_user(client: &SpotifyClient) -> Result<UserProfile> {
    let user: PrivateUser = client.get_json("/me", &[] as &[(&str, &str)]).await?;
    Ok(user.into())
}

pub async fn top_artists(
    client: &SpotifyClient,
    limit: u32,
    time_range: TimeRange,
) -> Result<Vec<Artist>> {
    let limit = limit.to_string();
    let page: Paging<Artist> = client
        .get_json(
            "/me/top/artists",
            &[("limit", limit.as_str()), ("time_range", time_range.as_str())],
        )
        .await?;
    Ok(page.items)
}
