//! Integration tests for environment validation and typed retrieval
//!
//! Most tests use an isolated `MapSource`. Tests that touch the real process
//! environment serialize on `ENV_MUTEX` to avoid interference between tests.

use envcheck::core::{ConfigChecker, MapSource};
use envcheck::domain::{ConfigValue, EnvCheckError, ValueType};
use envcheck::schema::{ConfigCollection, ConfigOptions};
use std::sync::Mutex;
use test_case::test_case;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn check_one(
    name: &str,
    value_type: ValueType,
    options: ConfigOptions,
    raw: &str,
) -> Result<ConfigChecker, EnvCheckError> {
    let collection = ConfigCollection::new()
        .include_with(name, value_type, options)
        .unwrap();
    ConfigChecker::with_source(&collection, MapSource::from_iter([(name, raw)]))
}

fn retrieve_one(value_type: ValueType, options: ConfigOptions, raw: &str) -> ConfigValue {
    let checker = check_one("CFG", value_type, options, raw).unwrap();
    assert_eq!(checker.retrieve_all().len(), 1);
    checker.retrieve("CFG").unwrap().clone()
}

#[test]
fn test_new_instance_without_schema() {
    let checker = ConfigChecker::empty();
    assert!(checker.retrieve_all().is_empty());
}

#[test]
fn test_text_config() {
    assert_eq!(
        retrieve_one(ValueType::Text, ConfigOptions::new(), "some text"),
        ConfigValue::from("some text")
    );
}

#[test_case("123", 123.0 ; "positive")]
#[test_case("999999", 999999.0 ; "large")]
#[test_case("-2", -2.0 ; "small negative")]
#[test_case("-999999", -999999.0 ; "large negative")]
#[test_case("0", 0.0 ; "zero")]
#[test_case("9007199254740993", 9007199254740992.0 ; "beyond f64 precision")]
fn test_number_config(raw: &str, expected: f64) {
    assert_eq!(
        retrieve_one(ValueType::Number, ConfigOptions::new(), raw),
        ConfigValue::Number(expected)
    );
}

#[test_case("true", true ; "true")]
#[test_case("yes", true ; "yes")]
#[test_case("1", true ; "one")]
#[test_case("TRuE", true ; "mixed case true")]
#[test_case("yES", true ; "mixed case yes")]
#[test_case("false", false ; "false")]
#[test_case("no", false ; "no")]
#[test_case("0", false ; "zero")]
#[test_case("FAlsE", false ; "mixed case false")]
#[test_case("nO", false ; "mixed case no")]
fn test_boolean_config(raw: &str, expected: bool) {
    assert_eq!(
        retrieve_one(ValueType::Boolean, ConfigOptions::new(), raw),
        ConfigValue::Boolean(expected)
    );
}

#[test_case("one", &["one"] ; "single value")]
#[test_case("one,two,three", &["one", "two", "three"] ; "many values")]
#[test_case("one, two, three", &["one", " two", " three"] ; "no trimming")]
#[test_case(",,,", &["", "", "", ""] ; "only delimiters")]
fn test_list_config(raw: &str, expected: &[&str]) {
    assert_eq!(
        retrieve_one(ValueType::List, ConfigOptions::new(), raw),
        ConfigValue::from(expected.to_vec())
    );
}

#[test_case("one" ; "first")]
#[test_case("two" ; "second")]
#[test_case("three" ; "third")]
fn test_enum_config(raw: &str) {
    let options = ConfigOptions::new().items(["one", "two", "three"]);
    assert_eq!(
        retrieve_one(ValueType::Enum, options, raw),
        ConfigValue::from(raw)
    );
}

#[test]
fn test_optional_configs_use_type_defaults() {
    let optional = || ConfigOptions::new().required(false);
    let collection = ConfigCollection::new()
        .include_with("OPTIONAL_TEXT", ValueType::Text, optional())
        .unwrap()
        .include_with("OPTIONAL_NUMBER", ValueType::Number, optional())
        .unwrap()
        .include_with("OPTIONAL_BOOLEAN", ValueType::Boolean, optional())
        .unwrap()
        .include_with("OPTIONAL_LIST", ValueType::List, optional())
        .unwrap()
        .include_with("OPTIONAL_ENUM", ValueType::Enum, optional())
        .unwrap();

    let checker = ConfigChecker::with_source(&collection, MapSource::new()).unwrap();

    assert_eq!(checker.retrieve("OPTIONAL_TEXT").unwrap(), &ConfigValue::from(""));
    assert_eq!(checker.retrieve("OPTIONAL_NUMBER").unwrap(), &ConfigValue::Number(0.0));
    assert_eq!(checker.retrieve("OPTIONAL_BOOLEAN").unwrap(), &ConfigValue::Boolean(false));
    assert_eq!(checker.retrieve("OPTIONAL_LIST").unwrap(), &ConfigValue::List(vec![]));
    assert_eq!(checker.retrieve("OPTIONAL_ENUM").unwrap(), &ConfigValue::from(""));
}

#[test_case(ValueType::Text, ConfigValue::from(""); "text")]
#[test_case(ValueType::Number, ConfigValue::Number(0.0); "number")]
#[test_case(ValueType::Boolean, ConfigValue::Boolean(false); "boolean")]
#[test_case(ValueType::List, ConfigValue::List(vec![]); "list")]
#[test_case(ValueType::Enum, ConfigValue::from(""); "enum")]
fn test_empty_value_uses_type_default(value_type: ValueType, expected: ConfigValue) {
    let value = retrieve_one(value_type, ConfigOptions::new().required(false), "");
    assert_eq!(value, expected);
}

#[test_case(ValueType::Text; "text")]
#[test_case(ValueType::Number; "number")]
#[test_case(ValueType::Boolean; "boolean")]
#[test_case(ValueType::List; "list")]
#[test_case(ValueType::Enum; "enum")]
fn test_empty_value_on_required_config_is_missing(value_type: ValueType) {
    let err = check_one("CFG", value_type, ConfigOptions::new(), "").unwrap_err();
    match err {
        EnvCheckError::MissingRequired { names } => assert_eq!(names, ["CFG"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_fallbacks_are_used_when_missing() {
    let collection = ConfigCollection::new()
        .include_with("PORT", ValueType::Number, ConfigOptions::new().fallback(8080))
        .unwrap()
        .include_with("HOSTS", ValueType::List, ConfigOptions::new().fallback(vec!["a", "b"]))
        .unwrap()
        .include_with(
            "MODE",
            ValueType::Enum,
            ConfigOptions::new().items(["fast", "safe"]).fallback("safe"),
        )
        .unwrap();

    let checker = ConfigChecker::with_source(&collection, MapSource::new()).unwrap();

    assert_eq!(checker.retrieve("PORT").unwrap().as_integer(), Some(8080));
    assert_eq!(
        checker.retrieve("HOSTS").unwrap().as_list(),
        Some(&["a".to_string(), "b".to_string()][..])
    );
    assert_eq!(checker.retrieve("MODE").unwrap().as_str(), Some("safe"));
}

#[test_case(ValueType::Number, "not a number", None ; "number")]
#[test_case(ValueType::Boolean, "not a boolean", None ; "boolean")]
#[test_case(ValueType::Enum, "one", Some(&["two", "three"][..]) ; "enum outside items")]
#[test_case(ValueType::Enum, "TWO", Some(&["two", "three"][..]) ; "enum is case sensitive")]
fn test_type_errors(value_type: ValueType, raw: &str, items: Option<&[&str]>) {
    let mut options = ConfigOptions::new();
    if let Some(items) = items {
        options = options.items(items.iter().copied());
    }

    let err = check_one("REQUIRED_VALUE", value_type, options, raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("environment variable REQUIRED_VALUE is not of type {value_type}")
    );
}

#[test]
fn test_undeclared_config_cannot_be_retrieved() {
    let err = ConfigChecker::empty().retrieve("UNDECLARED").unwrap_err();
    assert_eq!(err.to_string(), "unknown environment variable \"UNDECLARED\"");

    let collection = ConfigCollection::new().include("DECLARED", ValueType::Text).unwrap();
    let checker =
        ConfigChecker::with_source(&collection, MapSource::from_iter([("DECLARED", "x")])).unwrap();
    assert!(matches!(
        checker.retrieve("UNDECLARED"),
        Err(EnvCheckError::UnknownVariable { .. })
    ));
}

#[test]
fn test_single_missing_required_config() {
    let collection = ConfigCollection::new().include("REQUIRED_TEXT", ValueType::Text).unwrap();
    let err = ConfigChecker::with_source(&collection, MapSource::new()).unwrap_err();
    assert_eq!(err.to_string(), "missing environment variables: \"REQUIRED_TEXT\"");
}

#[test]
fn test_multiple_missing_required_configs() {
    let collection = ConfigCollection::new()
        .include("REQUIRED_TEXT", ValueType::Text)
        .unwrap()
        .include("REQUIRED_NUMBER", ValueType::Number)
        .unwrap()
        .include("REQUIRED_BOOLEAN", ValueType::Boolean)
        .unwrap()
        .include("REQUIRED_LIST", ValueType::List)
        .unwrap()
        .include_with("REQUIRED_ENUM", ValueType::Enum, ConfigOptions::new().items(["a"]))
        .unwrap();

    let err = ConfigChecker::with_source(&collection, MapSource::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing environment variables: \"REQUIRED_TEXT\", \"REQUIRED_NUMBER\", \
         \"REQUIRED_BOOLEAN\", \"REQUIRED_LIST\", \"REQUIRED_ENUM\""
    );
    match err {
        EnvCheckError::MissingRequired { names } => assert_eq!(names.len(), 5),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_declare_values() {
    let mut checker = ConfigChecker::with_source(&ConfigCollection::new(), MapSource::new()).unwrap();
    checker
        .declare("DECLARED_TEXT_CONFIG", "abc")
        .unwrap()
        .declare("DECLARED_NUMBER_CONFIG", 123)
        .unwrap()
        .declare("DECLARED_BOOLEAN_CONFIG", true)
        .unwrap()
        .declare("DECLARED_LIST_CONFIG", vec!["a", "b", "c"])
        .unwrap();

    assert_eq!(checker.retrieve_all().len(), 4);
    assert_eq!(checker.retrieve("DECLARED_TEXT_CONFIG").unwrap(), &ConfigValue::from("abc"));
    assert_eq!(checker.retrieve("DECLARED_NUMBER_CONFIG").unwrap(), &ConfigValue::Number(123.0));
    assert_eq!(checker.retrieve("DECLARED_BOOLEAN_CONFIG").unwrap(), &ConfigValue::Boolean(true));
    assert_eq!(
        checker.retrieve("DECLARED_LIST_CONFIG").unwrap(),
        &ConfigValue::from(vec!["a", "b", "c"])
    );
}

#[test]
fn test_declare_rejects_variables_set_in_source() {
    let vars = [
        ("MY_TEXT_VAR", "my text value"),
        ("MY_NUMBER_VAR", "123"),
        ("MY_BOOLEAN_VAR", "true"),
        ("MY_LIST_VAR", "one,two,three"),
        ("MY_ENUM_VAR", "one"),
    ];
    let mut checker =
        ConfigChecker::with_source(&ConfigCollection::new(), MapSource::from_iter(vars)).unwrap();

    for (key, _) in vars {
        let err = checker.declare(key, "text").unwrap_err();
        assert_eq!(err.to_string(), format!("environment variable \"{key}\" already declared"));
    }
}

#[test]
fn test_merge_configs() {
    let mut first = ConfigChecker::with_source(&ConfigCollection::new(), MapSource::new()).unwrap();
    first.declare("A", 1).unwrap();
    let mut second = ConfigChecker::with_source(&ConfigCollection::new(), MapSource::new()).unwrap();
    second.declare("B", 2).unwrap();

    let merged = first.merge_configs(&second);

    assert_eq!(merged.retrieve_all().len(), 2);
    assert_eq!(merged.retrieve("A").unwrap(), &ConfigValue::Number(1.0));
    assert_eq!(merged.retrieve("B").unwrap(), &ConfigValue::Number(2.0));
}

#[test]
fn test_merge_configs_overlap_prefers_argument() {
    let collection = ConfigCollection::new().include("HOST", ValueType::Text).unwrap();
    let mut local =
        ConfigChecker::with_source(&collection, MapSource::from_iter([("HOST", "local")])).unwrap();
    let remote =
        ConfigChecker::with_source(&collection, MapSource::from_iter([("HOST", "remote")])).unwrap();

    local.merge_configs(&remote);

    assert_eq!(local.retrieve("HOST").unwrap().as_str(), Some("remote"));
    assert_eq!(remote.retrieve("HOST").unwrap().as_str(), Some("remote"));
}

#[test]
fn test_process_environment_is_read() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("ENVCHECK_IT_PORT", "4000");
    std::env::set_var("ENVCHECK_IT_FLAGS", "a,b");

    let collection = ConfigCollection::new()
        .include("ENVCHECK_IT_PORT", ValueType::Number)
        .unwrap()
        .include("ENVCHECK_IT_FLAGS", ValueType::List)
        .unwrap();
    let result = ConfigChecker::new(&collection);

    std::env::remove_var("ENVCHECK_IT_PORT");
    std::env::remove_var("ENVCHECK_IT_FLAGS");

    let checker = result.unwrap();
    assert_eq!(checker.retrieve("ENVCHECK_IT_PORT").unwrap().as_integer(), Some(4000));
    assert_eq!(
        checker.retrieve("ENVCHECK_IT_FLAGS").unwrap(),
        &ConfigValue::from(vec!["a", "b"])
    );
}

#[test]
fn test_declare_rejects_process_environment_variables() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("ENVCHECK_IT_ALREADY_SET", "1");

    let mut checker = ConfigChecker::empty();
    let result = checker.declare("ENVCHECK_IT_ALREADY_SET", 1).map(|_| ());

    std::env::remove_var("ENVCHECK_IT_ALREADY_SET");

    assert!(matches!(result, Err(EnvCheckError::AlreadyDeclared { .. })));
    assert!(checker.declare("ENVCHECK_IT_ALREADY_SET", 1).is_ok());
}

#[test]
fn test_refresh_reads_process_environment_again() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("ENVCHECK_IT_REFRESH", "first");

    let collection = ConfigCollection::new()
        .include("ENVCHECK_IT_REFRESH", ValueType::Text)
        .unwrap();
    let mut checker = ConfigChecker::new(&collection).unwrap();

    std::env::set_var("ENVCHECK_IT_REFRESH", "second");
    let refreshed = checker.refresh().map(|c| c.retrieve_all().clone());

    std::env::remove_var("ENVCHECK_IT_REFRESH");

    let values = refreshed.unwrap();
    assert_eq!(values["ENVCHECK_IT_REFRESH"], ConfigValue::from("second"));
}
