//! The `to_mapping` projection and `Visitor` trait (`spec.md` §4.6, Design
//! Notes §9): a schemaless view over the tagged-variant tree for consumers
//! that want to walk the AST without matching on every concrete node type.

use super::*;

/// A schemaless projection of one AST node, keyed by field name. Downstream
/// consumers that don't want to depend on every concrete node type (e.g. a
/// generic pretty-printer) can walk this instead of the typed tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapping {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Mapping>),
    Node(NodeKind, Vec<(&'static str, Mapping)>),
}

/// Implemented by every AST node type; `to_mapping` is the AST Builder's
/// dynamic counterpart (`spec.md` §4.6) for a statically-typed tree.
pub trait AstNode {
    fn kind(&self) -> NodeKind;
    fn to_mapping(&self) -> Mapping;
}

fn node(kind: NodeKind, fields: Vec<(&'static str, Mapping)>) -> Mapping {
    Mapping::Node(kind, fields)
}

fn list_of<T: AstNode>(items: &[T]) -> Mapping {
    Mapping::List(items.iter().map(AstNode::to_mapping).collect())
}

fn opt_of<T: AstNode>(item: &Option<T>) -> Mapping {
    item.as_ref().map(AstNode::to_mapping).unwrap_or(Mapping::Null)
}

impl AstNode for Name {
    fn kind(&self) -> NodeKind {
        NodeKind::Name
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("value", Mapping::Str(self.value.clone()))])
    }
}

impl AstNode for Document {
    fn kind(&self) -> NodeKind {
        NodeKind::Document
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("definitions", list_of(&self.definitions))])
    }
}

impl AstNode for Definition {
    fn kind(&self) -> NodeKind {
        match self {
            Definition::Operation(d) => d.kind(),
            Definition::Fragment(d) => d.kind(),
            Definition::Schema(d) => d.kind(),
            Definition::ScalarType(d) => d.kind(),
            Definition::ObjectType(d) => d.kind(),
            Definition::InterfaceType(d) => d.kind(),
            Definition::UnionType(d) => d.kind(),
            Definition::EnumType(d) => d.kind(),
            Definition::InputObjectType(d) => d.kind(),
            Definition::Directive(d) => d.kind(),
            Definition::SchemaExtension(d) => d.kind(),
            Definition::ScalarTypeExtension(d) => d.kind(),
            Definition::ObjectTypeExtension(d) => d.kind(),
            Definition::InterfaceTypeExtension(d) => d.kind(),
            Definition::UnionTypeExtension(d) => d.kind(),
            Definition::EnumTypeExtension(d) => d.kind(),
            Definition::InputObjectTypeExtension(d) => d.kind(),
        }
    }
    fn to_mapping(&self) -> Mapping {
        match self {
            Definition::Operation(d) => d.to_mapping(),
            Definition::Fragment(d) => d.to_mapping(),
            Definition::Schema(d) => d.to_mapping(),
            Definition::ScalarType(d) => d.to_mapping(),
            Definition::ObjectType(d) => d.to_mapping(),
            Definition::InterfaceType(d) => d.to_mapping(),
            Definition::UnionType(d) => d.to_mapping(),
            Definition::EnumType(d) => d.to_mapping(),
            Definition::InputObjectType(d) => d.to_mapping(),
            Definition::Directive(d) => d.to_mapping(),
            Definition::SchemaExtension(d) => d.to_mapping(),
            Definition::ScalarTypeExtension(d) => d.to_mapping(),
            Definition::ObjectTypeExtension(d) => d.to_mapping(),
            Definition::InterfaceTypeExtension(d) => d.to_mapping(),
            Definition::UnionTypeExtension(d) => d.to_mapping(),
            Definition::EnumTypeExtension(d) => d.to_mapping(),
            Definition::InputObjectTypeExtension(d) => d.to_mapping(),
        }
    }
}

fn operation_type_str(op: OperationType) -> &'static str {
    match op {
        OperationType::Query => "query",
        OperationType::Mutation => "mutation",
        OperationType::Subscription => "subscription",
    }
}

impl AstNode for OperationDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::OperationDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("operation", Mapping::Str(operation_type_str(self.operation).to_string())),
                ("name", opt_of(&self.name)),
                ("variableDefinitions", list_of(&self.variable_definitions)),
                ("directives", list_of(&self.directives)),
                ("selectionSet", self.selection_set.to_mapping()),
            ],
        )
    }
}

impl AstNode for VariableDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::VariableDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("variable", self.variable.to_mapping()),
                ("type", self.ty.to_mapping()),
                (
                    "defaultValue",
                    self.default_value.as_ref().map(Value::to_mapping).unwrap_or(Mapping::Null),
                ),
                ("directives", list_of(&self.directives)),
            ],
        )
    }
}

impl AstNode for SelectionSet {
    fn kind(&self) -> NodeKind {
        NodeKind::SelectionSet
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("selections", list_of(&self.selections))])
    }
}

impl AstNode for Selection {
    fn kind(&self) -> NodeKind {
        match self {
            Selection::Field(f) => f.kind(),
            Selection::FragmentSpread(f) => f.kind(),
            Selection::InlineFragment(f) => f.kind(),
        }
    }
    fn to_mapping(&self) -> Mapping {
        match self {
            Selection::Field(f) => f.to_mapping(),
            Selection::FragmentSpread(f) => f.to_mapping(),
            Selection::InlineFragment(f) => f.to_mapping(),
        }
    }
}

impl AstNode for Field {
    fn kind(&self) -> NodeKind {
        NodeKind::Field
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("alias", opt_of(&self.alias)),
                ("name", self.name.to_mapping()),
                ("arguments", list_of(&self.arguments)),
                ("directives", list_of(&self.directives)),
                ("selectionSet", opt_of(&self.selection_set)),
            ],
        )
    }
}

impl AstNode for Argument {
    fn kind(&self) -> NodeKind {
        NodeKind::Argument
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![("name", self.name.to_mapping()), ("value", self.value.to_mapping())],
        )
    }
}

impl AstNode for FragmentSpread {
    fn kind(&self) -> NodeKind {
        NodeKind::FragmentSpread
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("fragmentName", self.fragment_name.to_mapping()),
                ("directives", list_of(&self.directives)),
            ],
        )
    }
}

impl AstNode for FragmentDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::FragmentDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("name", self.name.to_mapping()),
                ("typeCondition", self.type_condition.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("selectionSet", self.selection_set.to_mapping()),
            ],
        )
    }
}

impl AstNode for InlineFragment {
    fn kind(&self) -> NodeKind {
        NodeKind::InlineFragment
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("typeCondition", opt_of(&self.type_condition)),
                ("directives", list_of(&self.directives)),
                ("selectionSet", self.selection_set.to_mapping()),
            ],
        )
    }
}

impl AstNode for Variable {
    fn kind(&self) -> NodeKind {
        NodeKind::Variable
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("name", self.name.to_mapping())])
    }
}

impl AstNode for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Variable(v) => v.kind(),
            Value::Int(v) => v.kind(),
            Value::Float(v) => v.kind(),
            Value::String(v) => v.kind(),
            Value::Boolean(v) => v.kind(),
            Value::Null(v) => v.kind(),
            Value::Enum(v) => v.kind(),
            Value::List(v) => v.kind(),
            Value::Object(v) => v.kind(),
        }
    }
    fn to_mapping(&self) -> Mapping {
        match self {
            Value::Variable(v) => v.to_mapping(),
            Value::Int(v) => v.to_mapping(),
            Value::Float(v) => v.to_mapping(),
            Value::String(v) => v.to_mapping(),
            Value::Boolean(v) => v.to_mapping(),
            Value::Null(v) => v.to_mapping(),
            Value::Enum(v) => v.to_mapping(),
            Value::List(v) => v.to_mapping(),
            Value::Object(v) => v.to_mapping(),
        }
    }
}

impl AstNode for IntValue {
    fn kind(&self) -> NodeKind {
        NodeKind::IntValue
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("value", Mapping::Int(self.value))])
    }
}

impl AstNode for FloatValue {
    fn kind(&self) -> NodeKind {
        NodeKind::FloatValue
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("value", Mapping::Float(self.value))])
    }
}

impl AstNode for StringValue {
    fn kind(&self) -> NodeKind {
        NodeKind::StringValue
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("value", Mapping::Str(self.value.clone()))])
    }
}

impl AstNode for BooleanValue {
    fn kind(&self) -> NodeKind {
        NodeKind::BooleanValue
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("value", Mapping::Bool(self.value))])
    }
}

impl AstNode for NullValue {
    fn kind(&self) -> NodeKind {
        NodeKind::NullValue
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![])
    }
}

impl AstNode for EnumValue {
    fn kind(&self) -> NodeKind {
        NodeKind::EnumValue
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("value", Mapping::Str(self.value.clone()))])
    }
}

impl AstNode for ListValue {
    fn kind(&self) -> NodeKind {
        NodeKind::ListValue
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("values", list_of(&self.values))])
    }
}

impl AstNode for ObjectValue {
    fn kind(&self) -> NodeKind {
        NodeKind::ObjectValue
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("fields", list_of(&self.fields))])
    }
}

impl AstNode for ObjectField {
    fn kind(&self) -> NodeKind {
        NodeKind::ObjectField
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![("name", self.name.to_mapping()), ("value", self.value.to_mapping())],
        )
    }
}

impl AstNode for Directive {
    fn kind(&self) -> NodeKind {
        NodeKind::Directive
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![("name", self.name.to_mapping()), ("arguments", list_of(&self.arguments))],
        )
    }
}

impl AstNode for NamedType {
    fn kind(&self) -> NodeKind {
        NodeKind::NamedType
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("name", self.name.to_mapping())])
    }
}

impl AstNode for ListType {
    fn kind(&self) -> NodeKind {
        NodeKind::ListType
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("type", self.ty.to_mapping())])
    }
}

impl AstNode for NonNullableType {
    fn kind(&self) -> NodeKind {
        match self {
            NonNullableType::Named(t) => t.kind(),
            NonNullableType::List(t) => t.kind(),
        }
    }
    fn to_mapping(&self) -> Mapping {
        match self {
            NonNullableType::Named(t) => t.to_mapping(),
            NonNullableType::List(t) => t.to_mapping(),
        }
    }
}

impl AstNode for NonNullType {
    fn kind(&self) -> NodeKind {
        NodeKind::NonNullType
    }
    fn to_mapping(&self) -> Mapping {
        node(self.kind(), vec![("type", self.ty.to_mapping())])
    }
}

impl AstNode for Type {
    fn kind(&self) -> NodeKind {
        match self {
            Type::Named(t) => t.kind(),
            Type::List(t) => t.kind(),
            Type::NonNull(t) => t.kind(),
        }
    }
    fn to_mapping(&self) -> Mapping {
        match self {
            Type::Named(t) => t.to_mapping(),
            Type::List(t) => t.to_mapping(),
            Type::NonNull(t) => t.to_mapping(),
        }
    }
}

impl AstNode for SchemaDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::SchemaDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("directives", list_of(&self.directives)),
                ("operationTypes", list_of(&self.operation_types)),
            ],
        )
    }
}

impl AstNode for OperationTypeDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::OperationTypeDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("operation", Mapping::Str(operation_type_str(self.operation).to_string())),
                ("type", self.ty.to_mapping()),
            ],
        )
    }
}

impl AstNode for ScalarTypeDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::ScalarTypeDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
            ],
        )
    }
}

impl AstNode for ObjectTypeDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::ObjectTypeDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("interfaces", list_of(&self.interfaces)),
                ("directives", list_of(&self.directives)),
                ("fields", list_of(&self.fields)),
            ],
        )
    }
}

impl AstNode for FieldDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("arguments", list_of(&self.arguments)),
                ("type", self.ty.to_mapping()),
                ("directives", list_of(&self.directives)),
            ],
        )
    }
}

impl AstNode for InputValueDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("type", self.ty.to_mapping()),
                (
                    "defaultValue",
                    self.default_value.as_ref().map(Value::to_mapping).unwrap_or(Mapping::Null),
                ),
                ("directives", list_of(&self.directives)),
            ],
        )
    }
}

impl AstNode for InterfaceTypeDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::InterfaceTypeDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("fields", list_of(&self.fields)),
            ],
        )
    }
}

impl AstNode for UnionTypeDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::UnionTypeDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("types", list_of(&self.types)),
            ],
        )
    }
}

impl AstNode for EnumTypeDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("values", list_of(&self.values)),
            ],
        )
    }
}

impl AstNode for EnumValueDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("value", self.value.to_mapping()),
                ("directives", list_of(&self.directives)),
            ],
        )
    }
}

impl AstNode for InputObjectTypeDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::InputObjectTypeDefinition
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("fields", list_of(&self.fields)),
            ],
        )
    }
}

impl AstNode for DirectiveDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::DirectiveDefinition
    }
    fn to_mapping(&self) -> Mapping {
        let locations = self
            .locations
            .iter()
            .map(|l| Mapping::Str(format!("{l:?}")))
            .collect();
        node(
            self.kind(),
            vec![
                ("description", opt_of(&self.description)),
                ("name", self.name.to_mapping()),
                ("arguments", list_of(&self.arguments)),
                ("repeatable", Mapping::Bool(self.repeatable)),
                ("locations", Mapping::List(locations)),
            ],
        )
    }
}

impl AstNode for SchemaExtension {
    fn kind(&self) -> NodeKind {
        NodeKind::SchemaExtension
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("directives", list_of(&self.directives)),
                ("operationTypes", list_of(&self.operation_types)),
            ],
        )
    }
}

impl AstNode for ScalarTypeExtension {
    fn kind(&self) -> NodeKind {
        NodeKind::ScalarTypeExtension
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![("name", self.name.to_mapping()), ("directives", list_of(&self.directives))],
        )
    }
}

impl AstNode for ObjectTypeExtension {
    fn kind(&self) -> NodeKind {
        NodeKind::ObjectTypeExtension
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("name", self.name.to_mapping()),
                ("interfaces", list_of(&self.interfaces)),
                ("directives", list_of(&self.directives)),
                ("fields", list_of(&self.fields)),
            ],
        )
    }
}

impl AstNode for InterfaceTypeExtension {
    fn kind(&self) -> NodeKind {
        NodeKind::InterfaceTypeExtension
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("fields", list_of(&self.fields)),
            ],
        )
    }
}

impl AstNode for UnionTypeExtension {
    fn kind(&self) -> NodeKind {
        NodeKind::UnionTypeExtension
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("types", list_of(&self.types)),
            ],
        )
    }
}

impl AstNode for EnumTypeExtension {
    fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeExtension
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("values", list_of(&self.values)),
            ],
        )
    }
}

impl AstNode for InputObjectTypeExtension {
    fn kind(&self) -> NodeKind {
        NodeKind::InputObjectTypeExtension
    }
    fn to_mapping(&self) -> Mapping {
        node(
            self.kind(),
            vec![
                ("name", self.name.to_mapping()),
                ("directives", list_of(&self.directives)),
                ("fields", list_of(&self.fields)),
            ],
        )
    }
}

/// Walks a [`Document`], dispatching one method per definition kind. Default
/// methods no-op, so a visitor only needs to override what it cares about —
/// the shape the teacher's own `Visitor` trait (in the encoder/validation
/// crates of the source workspace) follows for CST node visitation.
pub trait Visitor {
    fn visit_document(&mut self, document: &Document) {
        for definition in &document.definitions {
            self.visit_definition(definition);
        }
    }

    fn visit_definition(&mut self, definition: &Definition) {
        match definition {
            Definition::Operation(d) => self.visit_operation_definition(d),
            Definition::Fragment(d) => self.visit_fragment_definition(d),
            _ => {}
        }
    }

    fn visit_operation_definition(&mut self, operation: &OperationDefinition) {
        self.visit_selection_set(&operation.selection_set);
    }

    fn visit_fragment_definition(&mut self, fragment: &FragmentDefinition) {
        self.visit_selection_set(&fragment.selection_set);
    }

    fn visit_selection_set(&mut self, selection_set: &SelectionSet) {
        for selection in &selection_set.selections {
            self.visit_selection(selection);
        }
    }

    fn visit_selection(&mut self, selection: &Selection) {
        match selection {
            Selection::Field(field) => self.visit_field(field),
            Selection::FragmentSpread(spread) => self.visit_fragment_spread(spread),
            Selection::InlineFragment(inline) => self.visit_inline_fragment(inline),
        }
    }

    fn visit_field(&mut self, field: &Field) {
        if let Some(selection_set) = &field.selection_set {
            self.visit_selection_set(selection_set);
        }
    }

    fn visit_fragment_spread(&mut self, _spread: &FragmentSpread) {}

    fn visit_inline_fragment(&mut self, inline: &InlineFragment) {
        self.visit_selection_set(&inline.selection_set);
    }
}
