use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;

pub fn run<S: DataStore + ?Sized>(store: &S) -> Result<Vec<Todo>> {
    store.list()
}
