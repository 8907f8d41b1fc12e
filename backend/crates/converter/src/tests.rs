//! Scenario tests for the converter
//! Both input shapes (JSON object and named-field struct) go through the
//! same accessors and must behave identically.

#[cfg(test)]
mod scenario_tests {
    use crate::{Converter, FieldRecord};
    use chrono::{DateTime, Utc};
    use kernel::error::kind::ErrorKind;
    use serde::Serialize;
    use serde_json::{Value, json};
    use value_object::{Email, Identifier, Phone};

    const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct UserRow {
        uuid: Option<String>,
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone: Option<String>,
        created_at: Option<String>,
    }

    fn instant(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn full_map() -> Converter {
        Converter::from_value(json!({
            "uuid": NIL_UUID,
            "firstName": "John",
            "lastName": "Doe",
            "email": "alef@gmail.com",
            "phone": "+5511999999999",
            "createdAt": "2020-01-01 00:00:00",
        }))
        .unwrap()
    }

    fn full_struct() -> Converter<FieldRecord> {
        Converter::from_struct(&UserRow {
            uuid: Some(NIL_UUID.into()),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: Some("alef@gmail.com".into()),
            phone: Some("+5511999999999".into()),
            created_at: Some("2020-01-01 00:00:00".into()),
        })
        .unwrap()
    }

    #[test]
    fn test_map_success() {
        let c = full_map();
        assert_eq!(c.string("firstName").unwrap(), "John");
        assert_eq!(c.string("lastName").unwrap(), "Doe");
        assert_eq!(c.uuid("uuid").unwrap(), Identifier::parse_str(NIL_UUID).unwrap());
        assert_eq!(c.email("email").unwrap(), Email::new("alef@gmail.com").unwrap());
        assert_eq!(c.phone("phone").unwrap(), Phone::new("+5511999999999").unwrap());
        assert_eq!(c.datetime("createdAt").unwrap(), instant("2020-01-01T00:00:00Z"));
    }

    #[test]
    fn test_struct_success() {
        let c = full_struct();
        assert_eq!(c.string("firstName").unwrap(), "John");
        assert_eq!(c.string("lastName").unwrap(), "Doe");
        assert_eq!(c.uuid("uuid").unwrap(), Identifier::parse_str(NIL_UUID).unwrap());
        assert_eq!(c.email("email").unwrap(), Email::new("alef@gmail.com").unwrap());
        assert_eq!(c.phone("phone").unwrap(), Phone::new("+5511999999999").unwrap());
        assert_eq!(c.datetime("createdAt").unwrap(), instant("2020-01-01T00:00:00Z"));
    }

    #[test]
    fn test_map_with_null_values() {
        let c = Converter::from_value(json!({
            "uuid": null,
            "firstName": "John",
            "lastName": "Doe",
            "email": null,
            "phone": null,
            "createdAt": null,
        }))
        .unwrap();

        assert_eq!(c.string("firstName").unwrap(), "John");
        assert!(c.uuid_or_null("uuid").unwrap().is_none());
        assert!(c.email_or_null("email").unwrap().is_none());
        assert!(c.phone_or_null("phone").unwrap().is_none());
        assert!(c.datetime_or_null("createdAt").unwrap().is_none());
    }

    #[test]
    fn test_struct_with_null_values() {
        let c = Converter::from_struct(&UserRow {
            uuid: None,
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: None,
            phone: None,
            created_at: None,
        })
        .unwrap();

        assert!(c.has("uuid"));
        assert_eq!(c.string("lastName").unwrap(), "Doe");
        assert!(c.uuid_or_null("uuid").unwrap().is_none());
        assert!(c.email_or_null("email").unwrap().is_none());
        assert!(c.phone_or_null("phone").unwrap().is_none());
        assert!(c.datetime_or_null("createdAt").unwrap().is_none());
    }

    #[test]
    fn test_missing_key() {
        let c = Converter::from_value(json!({ "firstName": "John" })).unwrap();

        assert!(c.email_or_null("email").unwrap().is_none());

        let err = c.email("email").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_has_ignores_value() {
        let c = Converter::from_value(json!({ "a": null, "b": false, "c": 0, "d": "" })).unwrap();
        for key in ["a", "b", "c", "d"] {
            assert!(c.has(key), "{key} should be present");
        }
        assert!(!c.has("e"));
    }

    #[test]
    fn test_or_null_is_none_only_for_absent_or_null() {
        let c = Converter::from_value(json!({ "flag": false, "zero": 0, "empty": "" })).unwrap();

        assert_eq!(c.bool_or_null("flag").unwrap(), Some(false));
        assert_eq!(c.int_or_null("zero").unwrap(), Some(0));
        assert_eq!(c.string_or_null("empty").unwrap(), Some(String::new()));
        assert_eq!(c.bool_or_null("absent").unwrap(), None);
    }

    #[test]
    fn test_value_object_errors_propagate_unchanged() {
        let c = Converter::from_value(json!({
            "uuid": "not-a-uuid",
            "email": "nope",
            "phone": "12",
            "hash": "xyz",
            "passwordHash": "plain",
            "password": "short",
            "id": -1,
        }))
        .unwrap();

        let email_err = c.email("email").unwrap_err().into_app_error();
        let direct_err = Email::new("nope").unwrap_err();
        assert_eq!(email_err.message(), direct_err.message());
        assert_eq!(email_err.action(), direct_err.action());

        // The nullable variant fails the same way once the key is present
        assert!(c.email_or_null("email").unwrap_err().is_validation());
        assert!(c.uuid_or_null("uuid").unwrap_err().is_validation());
        assert!(c.phone("phone").unwrap_err().is_validation());
        assert!(c.hash("hash").unwrap_err().is_validation());
        assert!(c.password_hash("passwordHash").unwrap_err().is_validation());
        assert!(c.password("password").unwrap_err().is_validation());
        assert!(c.numeric_id("id").unwrap_err().is_validation());
    }

    #[test]
    fn test_value_object_success() {
        let c = Converter::from_value(json!({
            "id": "42",
            "hash": "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855",
            "password": "CorrectHorse9!",
            "passwordHash": "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$U5QUxz2DMWSfDmORIFtkgxHvlt3Wu8XEDMiP0IyiVyo",
        }))
        .unwrap();

        assert_eq!(c.numeric_id("id").unwrap().value(), 42);
        assert_eq!(c.hash("hash").unwrap(), value_object::Hash::sha256(b""));
        assert_eq!(c.password("password").unwrap().expose(), "CorrectHorse9!");
        assert_eq!(c.password_hash("passwordHash").unwrap().algorithm(), "argon2id");
        assert!(c.hash_or_null("nothing").unwrap().is_none());
    }

    #[test]
    fn test_unparseable_datetime_and_timezone() {
        let c = Converter::from_value(json!({ "at": "31/31/2020", "tz": "Nowhere/City" })).unwrap();

        let err = c.datetime("at").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.kind(), ErrorKind::BadRequest);

        assert!(c.timezone("tz").unwrap_err().is_validation());
        assert!(c.timezone_or_null("missing").unwrap().is_none());
    }

    #[test]
    fn test_timezone() {
        let c = Converter::from_value(json!({ "tz": "Europe/Lisbon" })).unwrap();
        assert_eq!(c.timezone("tz").unwrap(), chrono_tz::Tz::Europe__Lisbon);
    }

    #[test]
    fn test_deep_traversal_without_object_model() {
        let c = Converter::from_value(json!({
            "company": {
                "owner": {
                    "contact": { "email": "Owner@Example.com", "phone": null }
                }
            }
        }))
        .unwrap();

        let contact = c
            .converter("company")
            .and_then(|company| company.converter("owner"))
            .and_then(|owner| owner.converter("contact"))
            .unwrap();

        assert_eq!(contact.email("email").unwrap().as_str(), "owner@example.com");
        assert!(contact.phone_or_null("phone").unwrap().is_none());
    }

    #[test]
    fn test_reads_do_not_mutate_record() {
        let value = json!({ "n": "7", "nested": { "x": 1 } });
        let Value::Object(map) = value.clone() else {
            unreachable!()
        };
        let c = Converter::new(&map);

        let _ = c.int("n");
        let _ = c.converter("nested");
        let _ = c.string("missing");
        drop(c);

        assert_eq!(Value::Object(map), value);
    }
}
