use super::{CollectionModel, TypedRecord};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use utoipa::ToSchema;

/// The `people` collection.
pub struct PeopleModel;

impl CollectionModel for PeopleModel {
    fn collection_name(&self) -> &str {
        "people"
    }

    fn description(&self) -> &str {
        "People with a name, an age and a favorite color"
    }

    fn sample_payload(&self) -> JsonValue {
        json!({ "name": "Eminem", "age": 35, "favoriteColor": "black" })
    }
}

/// The `tweets` collection.
pub struct TweetsModel;

impl CollectionModel for TweetsModel {
    fn collection_name(&self) -> &str {
        "tweets"
    }

    fn description(&self) -> &str {
        "Tweets keyed by author handle"
    }

    fn sample_payload(&self) -> JsonValue {
        json!({ "handle": "sk@8trgrl", "tweet": "longboarding life yo" })
    }
}

/// The `animals` collection.
pub struct AnimalsModel;

impl CollectionModel for AnimalsModel {
    fn collection_name(&self) -> &str {
        "animals"
    }

    fn description(&self) -> &str {
        "Animals with a name and a kind"
    }

    fn sample_payload(&self) -> JsonValue {
        json!({ "name": "tiger", "type": "mammal" })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Server-assigned id; absent until the record is stored.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub age: u32,
    pub favorite_color: String,
}

impl TypedRecord for Person {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Tweet {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub handle: String,
    pub tweet: String,
}

impl TypedRecord for Tweet {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Animal {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Kind of animal (e.g. `mammal`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl TypedRecord for Animal {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TypedCollection;
    use crate::storage::record::{FsRecordStore, RecordStore, StoreError};
    use std::sync::Arc;

    fn person(name: &str) -> Person {
        Person {
            id: None,
            name: name.to_string(),
            age: 99,
            favorite_color: "black".to_string(),
        }
    }

    #[test]
    fn person_uses_wire_field_names() {
        let record = person("kristin1").to_record().unwrap();
        assert_eq!(
            JsonValue::Object(record),
            json!({ "name": "kristin1", "age": 99, "favoriteColor": "black" })
        );
    }

    #[test]
    fn animal_kind_maps_to_type() {
        let record = json!({ "_id": "a1", "name": "tiger", "type": "mammal" });
        let animal = Animal::from_record(record.as_object().cloned().unwrap()).unwrap();
        assert_eq!(animal.id.as_deref(), Some("a1"));
        assert_eq!(animal.kind, "mammal");
    }

    #[test]
    fn sample_payloads_fit_their_typed_wrappers() {
        let p = PeopleModel.sample_payload().as_object().cloned().unwrap();
        let t = TweetsModel.sample_payload().as_object().cloned().unwrap();
        let a = AnimalsModel.sample_payload().as_object().cloned().unwrap();
        assert!(Person::from_record(p).is_ok());
        assert!(Tweet::from_record(t).is_ok());
        assert!(Animal::from_record(a).is_ok());
    }

    #[tokio::test]
    async fn typed_collection_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn RecordStore> = Arc::new(FsRecordStore::new(dir.path(), "people"));
        let people = TypedCollection::<Person>::new(store);

        let created = people.create(&person("kristin1")).await.unwrap();
        let id = created.id.clone().unwrap();
        assert_eq!(people.get(&id).await.unwrap(), created);

        let updated = people
            .update(&id, &person("roxius"))
            .await
            .unwrap();
        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(people.list().await.unwrap(), vec![updated]);

        assert_eq!(people.delete(&id).await.unwrap(), 1);
        assert!(matches!(people.get(&id).await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn typed_view_rejects_records_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn RecordStore> = Arc::new(FsRecordStore::new(dir.path(), "tweets"));
        let raw = store
            .create(json!({ "handle": "only-handle" }).as_object().cloned().unwrap())
            .await
            .unwrap();
        let id = raw["_id"].as_str().unwrap().to_string();

        let tweets = TypedCollection::<Tweet>::new(store);
        assert!(matches!(tweets.get(&id).await, Err(StoreError::Serialize(_))));
    }
}
