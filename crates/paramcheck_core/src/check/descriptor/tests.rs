use crate::check::{DescriptorError, Nominal, SemanticKind, TypeDescriptor, Value, validate};

#[test]
fn parses_single_atoms() {
	assert_eq!("int".parse::<TypeDescriptor>(), Ok(TypeDescriptor::Plain(Nominal::Int)));
	assert_eq!("Size".parse::<TypeDescriptor>(), Ok(TypeDescriptor::Semantic(SemanticKind::Size)));
	assert_eq!("NoneType".parse::<TypeDescriptor>(), Ok(TypeDescriptor::Plain(Nominal::None)));
	assert_eq!("@Camera".parse::<TypeDescriptor>(), Ok(TypeDescriptor::named("Camera")));
}

#[test]
fn parses_nullable_union() {
	let descriptor: TypeDescriptor = " PositiveInt | None ".parse().expect("union parses");
	let TypeDescriptor::Union(union) = &descriptor else {
		panic!("expected union, got {descriptor:?}");
	};
	assert!(union.nullable());
	assert_eq!(union.alternatives(), &[TypeDescriptor::Semantic(SemanticKind::PositiveInt)]);
	assert_eq!(descriptor.to_string(), "PositiveInt | None");
}

#[test]
fn rejects_unknown_and_malformed_text() {
	assert_eq!("".parse::<TypeDescriptor>(), Err(DescriptorError::Empty));
	assert_eq!(
		"Vec3".parse::<TypeDescriptor>(),
		Err(DescriptorError::UnknownType { name: "Vec3".to_owned() })
	);
	assert_eq!("int || str".parse::<TypeDescriptor>(), Err(DescriptorError::EmptyAlternative { position: 1 }));
	assert_eq!(
		"@".parse::<TypeDescriptor>(),
		Err(DescriptorError::UnknownType { name: "@".to_owned() })
	);
}

#[test]
fn union_flattens_nested_and_drops_duplicates() {
	let inner = TypeDescriptor::optional(TypeDescriptor::Semantic(SemanticKind::Size));
	let outer = TypeDescriptor::union([
		TypeDescriptor::Semantic(SemanticKind::Coordinate),
		inner,
		TypeDescriptor::Semantic(SemanticKind::Coordinate),
	])
	.expect("union builds");

	let TypeDescriptor::Union(union) = &outer else {
		panic!("expected union");
	};
	assert!(union.nullable());
	assert_eq!(
		union.alternatives(),
		&[TypeDescriptor::Semantic(SemanticKind::Coordinate), TypeDescriptor::Semantic(SemanticKind::Size)]
	);
	assert_eq!(outer.to_string(), "Coordinate | Size | None");
}

#[test]
fn empty_union_is_a_descriptor_fault() {
	assert_eq!(TypeDescriptor::union(Vec::new()), Err(DescriptorError::EmptyUnion));
	assert!(TypeDescriptor::union_with(Vec::new(), true).is_ok());
}

#[test]
fn nominal_membership_follows_value_kinds() {
	assert!(Nominal::Int.admits(&Value::from(3)));
	assert!(!Nominal::Int.admits(&Value::from(true)));
	assert!(!Nominal::Float.admits(&Value::from(3)));
	assert!(Nominal::Real.admits(&Value::from(3)));
	assert!(Nominal::Real.admits(&Value::from(0.5)));
	assert!(!Nominal::Sequence.admits(&Value::from("ab")));
	assert!(Nominal::None.admits(&Value::Null));
}

#[test]
fn named_types_cannot_shadow_builtin_atoms() {
	for text in ["@int", "@None", "@NoneType", "@Sequence", "@Size", "@ColorRGBA"] {
		assert_eq!(
			text.parse::<TypeDescriptor>(),
			Err(DescriptorError::UnknownType { name: text.to_owned() }),
			"text={text}"
		);
	}
	assert_eq!("@Camera_2".parse::<TypeDescriptor>(), Ok(TypeDescriptor::named("Camera_2")));
}

#[test]
fn display_text_parses_back_to_the_same_descriptor() {
	let descriptors = [
		TypeDescriptor::Plain(Nominal::Int),
		TypeDescriptor::named("Camera"),
		TypeDescriptor::Semantic(SemanticKind::ColorRGBA),
		TypeDescriptor::optional(TypeDescriptor::named("Camera")),
		TypeDescriptor::union([TypeDescriptor::Semantic(SemanticKind::Size), TypeDescriptor::Plain(Nominal::Str)]).expect("union builds"),
	];
	for descriptor in descriptors {
		let text = descriptor.to_string();
		assert_eq!(text.parse::<TypeDescriptor>(), Ok(descriptor), "text={text}");
	}
	assert_eq!(TypeDescriptor::named("Camera").to_string(), "@Camera");
}

#[test]
fn named_mismatch_names_expected_and_actual_types() {
	let descriptor: TypeDescriptor = "@Camera".parse().expect("named parses");
	let err = validate("x", &Value::from(3), &descriptor).expect_err("int is not a Camera");
	assert_eq!(err.message, "Invalid type for x. Expected @Camera, got int.");
}
