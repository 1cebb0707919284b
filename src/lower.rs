//! Raw model → constrained model.
//!
//! Keys are constrained strictly in the raw model's iteration order, each one
//! committed before the next is looked at: the duplicate resolvers decide
//! against what has been committed so far. Independent models share nothing
//! and are lowered in parallel by [`lower_all`].
use rayon::prelude::*;
use tracing::debug;

use crate::constrained::{
    ConstrainedEnumModel, ConstrainedEnumValueModel, ConstrainedModel, ConstrainedObjectModel,
    ConstrainedPropertyModel,
};
use crate::constrainer::{
    ConstrainerSet, EnumKeyConstrainer, EnumValueConstrainer, ModelNameConstrainer,
    PropertyKeyConstrainer,
};
use crate::model::{EnumModel, ObjectModel, RawModel};

pub fn lower_model(model: &RawModel, constrainers: &ConstrainerSet) -> ConstrainedModel {
    match model {
        RawModel::Object(object) => ConstrainedModel::Object(lower_object(object, constrainers)),
        RawModel::Enum(enum_) => ConstrainedModel::Enum(lower_enum(enum_, constrainers)),
    }
}

/// Output order matches input order.
pub fn lower_all(models: &[RawModel], constrainers: &ConstrainerSet) -> Vec<ConstrainedModel> {
    models
        .par_iter()
        .map(|model| lower_model(model, constrainers))
        .collect()
}

pub fn lower_object(model: &ObjectModel, constrainers: &ConstrainerSet) -> ConstrainedObjectModel {
    lower_object_with(model, &constrainers.property_key, &constrainers.model_name)
}

pub fn lower_object_with(
    model: &ObjectModel,
    property_key: &PropertyKeyConstrainer,
    model_name: &ModelNameConstrainer,
) -> ConstrainedObjectModel {
    let mut constrained = ConstrainedObjectModel::new(model_name.constrain(&model.name), &model.name);
    constrained.properties.reserve(model.properties.len());

    for (key, property) in &model.properties {
        let property_name = property_key.constrain(key, &constrained, model);
        // an overridden resolver may hand back a taken name; inserting it
        // would silently drop the earlier property
        assert!(
            !constrained.contains_key(&property_name),
            "{property_name:?} already committed to {}",
            constrained.name
        );
        constrained.properties.insert(property_name.clone(), ConstrainedPropertyModel {
            property_name,
            original_name: key.clone(),
            required: property.required,
            schema: property.schema.clone(),
        });
    }

    debug!(model = %constrained.name, properties = constrained.properties.len(), "lowered object");
    constrained
}

pub fn lower_enum(model: &EnumModel, constrainers: &ConstrainerSet) -> ConstrainedEnumModel {
    lower_enum_with(model, &constrainers.enum_key, &constrainers.enum_value, &constrainers.model_name)
}

pub fn lower_enum_with(
    model: &EnumModel,
    enum_key: &EnumKeyConstrainer,
    enum_value: &EnumValueConstrainer,
    model_name: &ModelNameConstrainer,
) -> ConstrainedEnumModel {
    let mut constrained = ConstrainedEnumModel::new(model_name.constrain(&model.name), &model.name);
    constrained.values.reserve(model.values.len());

    for value in &model.values {
        let key = enum_key.constrain(&value.key, &constrained, model);
        assert!(
            !constrained.contains_key(&key),
            "{key:?} already committed to {}",
            constrained.name
        );
        constrained.values.push(ConstrainedEnumValueModel {
            key,
            original_key: value.key.clone(),
            value: enum_value.constrain(&value.value),
            raw_value: value.value.clone(),
        });
    }

    debug!(model = %constrained.name, values = constrained.values.len(), "lowered enum");
    constrained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyModel;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn object_carries_property_data() {
        let raw = ObjectModel::new("user profile")
            .with_property("1st login", PropertyModel::required().with("type", json!("string")))
            .with_property("email", PropertyModel::default());
        let constrained = lower_object(&raw, &ConstrainerSet::default());

        assert_eq!(constrained.name, "UserProfile");
        assert_eq!(constrained.original_name, "user profile");
        let first = &constrained.properties["Number_1stLogin"];
        assert_eq!(first.original_name, "1st login");
        assert!(first.required);
        assert_eq!(first.schema["type"], json!("string"));
        assert!(!constrained.properties["Email"].required);
    }

    #[test]
    fn enum_values_rendered() {
        let raw = EnumModel::new("status")
            .with_value("ok", json!(200))
            .with_value("Ok", json!("fine"));
        let constrained = lower_enum(&raw, &ConstrainerSet::default());
        let rendered: Vec<(&str, &str)> = constrained
            .values
            .iter()
            .map(|v| (v.key.as_str(), v.value.as_str()))
            .collect();
        assert_eq!(rendered, vec![("Ok", "200"), ("Reserved_Ok", "\"fine\"")]);
    }

    #[test]
    #[should_panic(expected = "already committed")]
    fn colliding_property_resolver_is_rejected() {
        let property_key = PropertyKeyConstrainer::default()
            .with_no_duplicate_properties(|_, _, candidate, _| candidate.to_owned());
        let raw = ObjectModel::new("m").with_keys(["value", "Value"]);
        lower_object_with(&raw, &property_key, &ModelNameConstrainer::default());
    }

    #[test]
    #[should_panic(expected = "already committed")]
    fn colliding_enum_resolver_is_rejected() {
        let enum_key = EnumKeyConstrainer::default()
            .with_no_duplicate_keys(|_, _, candidate, _| candidate.to_owned());
        let raw = EnumModel::new("e").with_keys(["ok", "ok"]);
        lower_enum_with(
            &raw,
            &enum_key,
            &EnumValueConstrainer::default(),
            &ModelNameConstrainer::default(),
        );
    }

    #[test]
    fn lower_all_keeps_input_order() {
        let models: Vec<RawModel> = (0..32)
            .map(|i| ObjectModel::new(format!("model {i}")).with_keys(["a", "A"]).into())
            .collect();
        let constrained = lower_all(&models, &ConstrainerSet::default());
        for (i, model) in constrained.iter().enumerate() {
            assert_eq!(model.name(), format!("Model{i}"));
            assert_eq!(model.keys(), ["A", "Reserved_A"]);
        }
    }
}
