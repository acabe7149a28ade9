use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // creates the entity, or replaces it in place when its id is already stored
    async fn save(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    // snapshot of every stored entity in ascending id order
    async fn select_all(&self) -> LibraryResult<Vec<Entity>>;
}
