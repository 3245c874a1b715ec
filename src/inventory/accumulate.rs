use crate::types::{
    object::{Object, ObjectCache},
    object_path::ObjectPath,
};

/// Merge `updates` into the object stored at `path`.
///
/// Interfaces the stored object does not know yet are taken verbatim. Known
/// interfaces are merged property by property, last writer wins, and
/// properties the update does not mention are kept.
pub fn accumulate(store: &mut ObjectCache, path: &ObjectPath, updates: &Object) {
    let Some(object) = store.get_mut(path) else {
        store.insert(path.clone(), updates.clone());
        return;
    };

    for (interface, properties) in updates {
        match object.get_mut(interface) {
            Some(existing) => {
                for (property, value) in properties {
                    existing.insert(property.clone(), value.clone());
                }
            }
            None => {
                object.insert(interface.clone(), properties.clone());
            }
        }
    }
}
