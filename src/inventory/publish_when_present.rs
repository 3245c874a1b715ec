use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::inventory::{Inventory, accumulate::accumulate};
use crate::types::{
    object::{Object, ObjectCache},
    object_path::ObjectPath,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Neither present nor absent has been reported yet.
    Unknown,
    Present,
    Absent,
}

/// Holds back object state until the hardware behind a path is known to be
/// present.
///
/// Every update is merged into a per-path cache. Nothing reaches the wrapped
/// inventory for a path until it has been marked present, at which point the
/// accumulated object is published in one go. Once present, further updates
/// republish the whole accumulated object. Marking a path absent is forwarded
/// straight away but the cache is kept, so a device that comes back resumes
/// with everything learned about it so far.
pub struct PublishWhenPresentInventory<I> {
    inner: I,
    objects: ObjectCache,
    present: HashMap<ObjectPath, bool>,
}

impl<I: Inventory> PublishWhenPresentInventory<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            objects: ObjectCache::new(),
            present: HashMap::new(),
        }
    }

    pub fn presence(&self, path: &ObjectPath) -> Presence {
        match self.present.get(path) {
            None => Presence::Unknown,
            Some(true) => Presence::Present,
            Some(false) => Presence::Absent,
        }
    }

    pub fn cached_object(&self, path: &ObjectPath) -> Option<&Object> {
        self.objects.get(path)
    }

    pub fn cached_objects(&self) -> usize {
        self.objects.len()
    }

    async fn publish(&mut self, path: &ObjectPath) -> Result<()> {
        let Some(object) = self.objects.get(path) else {
            return Ok(());
        };

        debug!(%path, interfaces = object.len(), "publishing accumulated object");

        self.inner.update_object(path, object).await?;
        self.inner.mark_present(path).await
    }
}

#[async_trait]
impl<I: Inventory> Inventory for PublishWhenPresentInventory<I> {
    async fn update_object(&mut self, path: &ObjectPath, updates: &Object) -> Result<()> {
        accumulate(&mut self.objects, path, updates);

        if self.presence(path) != Presence::Present {
            debug!(%path, "holding update until present");
            return Ok(());
        }

        self.publish(path).await
    }

    async fn mark_present(&mut self, path: &ObjectPath) -> Result<()> {
        let previous = self.presence(path);
        self.present.insert(path.clone(), true);

        if previous == Presence::Present {
            return Ok(());
        }

        self.publish(path).await
    }

    async fn mark_absent(&mut self, path: &ObjectPath) -> Result<()> {
        let previous = self.presence(path);
        self.present.insert(path.clone(), false);

        if previous == Presence::Absent {
            return Ok(());
        }

        debug!(%path, ?previous, "forwarding absence");

        self.inner.mark_absent(path).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::inventory::testing::{Call, FailingInventory, RecordingInventory};

    fn object(value: serde_json::Value) -> Object {
        serde_json::from_value(value).unwrap()
    }

    fn gated() -> (PublishWhenPresentInventory<RecordingInventory>, RecordingInventory) {
        let recorder = RecordingInventory::default();
        (PublishWhenPresentInventory::new(recorder.clone()), recorder)
    }

    #[tokio::test]
    async fn updates_are_held_while_presence_is_unknown() {
        let (mut inventory, recorder) = gated();
        let path = ObjectPath::from("/chassis0");

        for model in ["X1", "X2", "X3"] {
            inventory
                .update_object(&path, &object(json!({ "Asset": { "Model": model } })))
                .await
                .unwrap();
        }

        assert!(recorder.calls().is_empty());
        assert_eq!(inventory.presence(&path), Presence::Unknown);
        assert_eq!(
            inventory.cached_object(&path),
            Some(&object(json!({ "Asset": { "Model": "X3" } })))
        );
    }

    #[tokio::test]
    async fn presence_publishes_accumulated_state_once() {
        let (mut inventory, recorder) = gated();
        let path = ObjectPath::from("/cpu0");

        inventory
            .update_object(&path, &object(json!({ "Asset": { "Model": "X1" } })))
            .await
            .unwrap();
        inventory
            .update_object(&path, &object(json!({ "Item": { "PrettyName": "cpu" } })))
            .await
            .unwrap();
        inventory.mark_present(&path).await.unwrap();

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Update(
                    path.clone(),
                    object(json!({
                        "Asset": { "Model": "X1" },
                        "Item": { "PrettyName": "cpu" }
                    }))
                ),
                Call::Present(path.clone()),
            ]
        );
    }

    #[tokio::test]
    async fn presence_without_cached_object_forwards_nothing() {
        let (mut inventory, recorder) = gated();
        let path = ObjectPath::from("/fan0");

        inventory.mark_present(&path).await.unwrap();

        assert!(recorder.calls().is_empty());
        assert_eq!(inventory.presence(&path), Presence::Present);
    }

    #[tokio::test]
    async fn repeated_presence_is_not_republished() {
        let (mut inventory, recorder) = gated();
        let path = ObjectPath::from("/cpu0");

        inventory
            .update_object(&path, &object(json!({ "Asset": { "Model": "X1" } })))
            .await
            .unwrap();
        inventory.mark_present(&path).await.unwrap();
        inventory.mark_present(&path).await.unwrap();

        assert_eq!(recorder.calls().len(), 2);
    }

    #[tokio::test]
    async fn absence_is_forwarded_once_per_transition() {
        let (mut inventory, recorder) = gated();
        let path = ObjectPath::from("/dimm3");

        inventory.mark_present(&path).await.unwrap();
        inventory.mark_absent(&path).await.unwrap();
        inventory.mark_absent(&path).await.unwrap();

        assert_eq!(recorder.calls(), vec![Call::Absent(path.clone())]);
        assert_eq!(inventory.presence(&path), Presence::Absent);
    }

    #[tokio::test]
    async fn absence_from_unknown_is_forwarded() {
        let (mut inventory, recorder) = gated();
        let path = ObjectPath::from("/dimm0");

        inventory.mark_absent(&path).await.unwrap();

        assert_eq!(recorder.calls(), vec![Call::Absent(path)]);
    }

    #[tokio::test]
    async fn updates_while_absent_are_held_and_republished_on_return() {
        let (mut inventory, recorder) = gated();
        let path = ObjectPath::from("/psu0");

        inventory
            .update_object(&path, &object(json!({ "Asset": { "Model": "P1" } })))
            .await
            .unwrap();
        inventory.mark_present(&path).await.unwrap();
        inventory.mark_absent(&path).await.unwrap();
        inventory
            .update_object(&path, &object(json!({ "Asset": { "Serial": "S9" } })))
            .await
            .unwrap();

        assert_eq!(recorder.calls().len(), 3);

        inventory.mark_present(&path).await.unwrap();

        let calls = recorder.calls();
        assert_eq!(
            calls[3..],
            [
                Call::Update(
                    path.clone(),
                    object(json!({ "Asset": { "Model": "P1", "Serial": "S9" } }))
                ),
                Call::Present(path.clone()),
            ]
        );
    }

    #[tokio::test]
    async fn chassis_scenario_end_to_end() {
        let (mut inventory, recorder) = gated();
        let path = ObjectPath::from("/chassis0");

        inventory
            .update_object(&path, &object(json!({ "Item": { "Present": false } })))
            .await
            .unwrap();
        inventory.mark_present(&path).await.unwrap();
        inventory
            .update_object(&path, &object(json!({ "Asset": { "Model": "X1" } })))
            .await
            .unwrap();

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Update(path.clone(), object(json!({ "Item": { "Present": false } }))),
                Call::Present(path.clone()),
                Call::Update(
                    path.clone(),
                    object(json!({
                        "Item": { "Present": false },
                        "Asset": { "Model": "X1" }
                    }))
                ),
                Call::Present(path.clone()),
            ]
        );
    }

    #[tokio::test]
    async fn paths_are_gated_independently() {
        let (mut inventory, recorder) = gated();
        let cpu = ObjectPath::from("/cpu0");
        let fan = ObjectPath::from("/fan0");

        inventory
            .update_object(&cpu, &object(json!({ "Asset": { "Model": "X1" } })))
            .await
            .unwrap();
        inventory
            .update_object(&fan, &object(json!({ "Asset": { "Model": "F1" } })))
            .await
            .unwrap();
        inventory.mark_present(&fan).await.unwrap();

        assert!(
            recorder
                .calls()
                .iter()
                .all(|call| call.path() == &fan)
        );
        assert_eq!(inventory.presence(&cpu), Presence::Unknown);
    }

    #[tokio::test]
    async fn forwarding_errors_reach_the_caller() {
        let mut inventory = PublishWhenPresentInventory::new(FailingInventory);
        let path = ObjectPath::from("/chassis0");

        inventory
            .update_object(&path, &object(json!({ "Item": { "Present": true } })))
            .await
            .unwrap();

        let error = inventory.mark_present(&path).await.unwrap_err();
        assert!(error.to_string().contains("inventory manager unavailable"));

        // state is committed before forwarding
        assert_eq!(inventory.presence(&path), Presence::Present);
        assert!(inventory.mark_absent(&path).await.is_err());
        assert_eq!(inventory.presence(&path), Presence::Absent);
    }

    #[tokio::test]
    async fn decorators_chain_through_boxes() {
        let recorder = RecordingInventory::default();
        let inner: Box<dyn Inventory + Send> =
            Box::new(PublishWhenPresentInventory::new(recorder.clone()));
        let mut inventory = PublishWhenPresentInventory::new(inner);
        let path = ObjectPath::from("/chassis0");

        inventory
            .update_object(&path, &object(json!({ "Item": { "Present": true } })))
            .await
            .unwrap();
        inventory.mark_present(&path).await.unwrap();

        assert_eq!(recorder.calls().len(), 2);
    }
}
