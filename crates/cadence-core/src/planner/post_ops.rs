//! Post operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::{OwnerId, Post, UpdatePostRequest},
    params::{Id, ListPosts, UpdatePost},
};

impl Planner {
    /// Lists the posts of one of the owner's plans in calendar order.
    ///
    /// # Errors
    ///
    /// `CadenceError::PlanNotFound` if the plan is not visible to `owner`.
    pub async fn list_posts(&self, owner: &OwnerId, params: &ListPosts) -> Result<Vec<Post>> {
        let filter = params.filter()?;
        let owner = owner.clone();
        let plan_id = params.plan_id;

        self.with_database(move |db| {
            let filter = (!filter.is_empty()).then_some(filter);
            db.list_posts(&owner, plan_id, filter.as_ref())
        })
        .await
    }

    /// Retrieves one of the owner's posts.
    pub async fn get_post(&self, owner: &OwnerId, params: &Id) -> Result<Option<Post>> {
        let owner = owner.clone();
        let id = params.id;

        self.with_database(move |db| db.get_post(&owner, id)).await
    }

    /// Applies a partial edit to one of the owner's posts.
    ///
    /// # Errors
    ///
    /// * `CadenceError::InvalidInput` for a blank title, malformed time or
    ///   unknown status
    /// * `CadenceError::PostNotFound` if the post is not visible to `owner`
    pub async fn update_post(&self, owner: &OwnerId, params: &UpdatePost) -> Result<Post> {
        let request = UpdatePostRequest::try_from(params.clone())?;
        let owner = owner.clone();
        let id = params.id;

        self.with_database(move |db| db.update_post(&owner, id, request))
            .await
    }
}
