use crate::error::Result;
use crate::model::TodoId;
use crate::store::DataStore;

pub fn run<S: DataStore + ?Sized>(store: &S, id: TodoId) -> Result<()> {
    store.delete(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_once() {
        let fixture = StoreFixture::new().with_todos(3);

        run(&fixture.store, 2).unwrap();
        assert_eq!(fixture.store.list().unwrap().len(), 2);

        let err = run(&fixture.store, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(fixture.store.list().unwrap().len(), 2);
    }
}
