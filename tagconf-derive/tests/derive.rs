//! Field tables generated by `#[derive(Config)]`

use tagconf::Config;

#[derive(Debug, Default, Config)]
struct Annotated {
    #[conf("required,env=ACCESS_SECRET")]
    pub access_secret: String,

    pub unannotated: String,

    #[conf("env=KAFKA_BROKERS,type=[,]string")]
    pub kafka_brokers: Vec<String>,

    #[conf("env=TYPE_NAME")]
    pub r#type: String,
}

#[derive(Debug, Default, Config)]
struct Empty {}

#[derive(Debug, Default, Config)]
struct Wrapper<T: tagconf::Slot + Default> {
    #[conf("env=INNER,type=uint16")]
    pub inner: T,
}

#[test]
fn test_fields_in_declaration_order() {
    let mut config = Annotated::default();
    let fields = config.fields();

    let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        vec!["access_secret", "unannotated", "kafka_brokers", "type"]
    );
}

#[test]
fn test_annotations_are_verbatim() {
    let mut config = Annotated::default();
    let fields = config.fields();

    assert_eq!(fields[0].annotation(), "required,env=ACCESS_SECRET");
    assert_eq!(fields[1].annotation(), "");
    assert_eq!(fields[2].annotation(), "env=KAFKA_BROKERS,type=[,]string");
}

#[test]
fn test_slots_point_at_fields() {
    let mut config = Annotated::default();
    {
        let mut fields = config.fields();
        assert_eq!(fields[2].slot().field_type().to_string(), "[]string");

        let value = tagconf::Value::Scalar(tagconf::Scalar::String("secret".to_string()));
        assert!(fields[0].slot().assign(value));
    }
    assert_eq!(config.access_secret, "secret");
}

#[test]
fn test_empty_struct_has_no_fields() {
    let mut config = Empty {};
    assert!(config.fields().is_empty());
    assert!(tagconf::validate_config(Empty {}).is_ok());
}

#[test]
fn test_generic_struct() {
    let mut config = Wrapper::<u16>::default();
    let mut fields = config.fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].slot().field_type().to_string(), "uint16");
}
