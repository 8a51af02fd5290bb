use crate::error::Result;
use crate::model::{Todo, TodoId};
use crate::store::DataStore;

pub fn run<S: DataStore + ?Sized>(store: &S, id: TodoId) -> Result<Todo> {
    store.get(id)
}
