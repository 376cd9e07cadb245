use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use itertools::Itertools;
use log::{debug, trace};

use crate::error::ModelError;
use crate::model::{
    DefinitionBody, Domain, Program, RecordInstance, RecordSchema, RuntimeVariable,
    VariableDeclaration, VariableId,
};

#[derive(Debug, Clone)]
pub struct ScalarArray {
    pub name: String,
    pub variables: Vec<VariableId>,
}

#[derive(Debug, Clone)]
pub struct RecordArray {
    pub name: String,
    pub schema: Rc<RecordSchema>,
    pub instances: Vec<RecordInstance>,
}

/// Everything one run needs: the type tables and the runtime variables.
///
/// Runtime variables live in a single arena whose order is the enumeration
/// order: every scalar array first, then every record array, each in
/// declaration order, record fields in schema order.
#[derive(Debug, Default)]
pub struct PuzzleModel {
    domains: HashMap<String, Rc<Domain>>,
    schemas: HashMap<String, Rc<RecordSchema>>,
    variables: Vec<RuntimeVariable>,
    scalar_arrays: Vec<ScalarArray>,
    record_arrays: Vec<RecordArray>,
}

impl PuzzleModel {
    pub fn build(program: &Program) -> Result<Self, ModelError> {
        let mut model = Self::default();

        for definition in &program.definitions {
            match &definition.body {
                DefinitionBody::Choices(labels) => {
                    let domain = Domain::new(definition.name.clone(), labels.clone());
                    model
                        .domains
                        .insert(definition.name.clone(), Rc::new(domain));
                }
                DefinitionBody::Record(entries) => {
                    let schema = RecordSchema::new(definition.name.clone(), entries.clone());
                    model
                        .schemas
                        .insert(definition.name.clone(), Rc::new(schema));
                }
            }
        }

        let mut seen = HashSet::new();
        for declaration in &program.variables {
            if !seen.insert(declaration.name.as_str()) {
                return Err(ModelError::DuplicateVariable(declaration.name.clone()));
            }
        }

        for declaration in &program.variables {
            if !model.schemas.contains_key(&declaration.type_name) {
                model.add_scalar_array(declaration)?;
            }
        }
        for declaration in &program.variables {
            if let Some(schema) = model.schemas.get(&declaration.type_name).cloned() {
                model.add_record_array(declaration, schema)?;
            }
        }

        debug!(
            target: "model",
            "Built {} runtime variables ({} scalar arrays, {} record arrays)",
            model.variables.len(),
            model.scalar_arrays.len(),
            model.record_arrays.len()
        );
        Ok(model)
    }

    fn add_scalar_array(&mut self, declaration: &VariableDeclaration) -> Result<(), ModelError> {
        let domain = self.domain(&declaration.type_name)?;
        let variables: Vec<VariableId> = (0..declaration.len())
            .map(|_| self.allocate(Rc::clone(&domain)))
            .collect();
        trace!(target: "model", "Scalar array {}: {:?}", declaration.name, variables);
        self.scalar_arrays.push(ScalarArray {
            name: declaration.name.clone(),
            variables,
        });
        Ok(())
    }

    fn add_record_array(
        &mut self,
        declaration: &VariableDeclaration,
        schema: Rc<RecordSchema>,
    ) -> Result<(), ModelError> {
        let mut instances = Vec::with_capacity(declaration.len());
        for _ in 0..declaration.len() {
            let mut instance = RecordInstance::new();
            for entry in &schema.entries {
                let domain = self.domain(&entry.type_name)?;
                instance.insert(entry.name.clone(), self.allocate(domain));
            }
            instances.push(instance);
        }

        for entry in schema.unique_entries() {
            let peers: Vec<VariableId> = instances
                .iter()
                .filter_map(|instance| instance.get(&entry.name))
                .collect();
            for (a, b) in peers.into_iter().tuple_combinations() {
                self.connect_peers(a, b);
            }
        }

        trace!(target: "model", "Record array {}: {:?}", declaration.name, instances);
        self.record_arrays.push(RecordArray {
            name: declaration.name.clone(),
            schema,
            instances,
        });
        Ok(())
    }

    fn allocate(&mut self, domain: Rc<Domain>) -> VariableId {
        self.variables.push(RuntimeVariable::new(domain));
        VariableId(self.variables.len() - 1)
    }

    fn connect_peers(&mut self, a: VariableId, b: VariableId) {
        if a == b {
            return;
        }
        self.variables[a.0].add_peer(b);
        self.variables[b.0].add_peer(a);
    }

    pub fn domain(&self, name: &str) -> Result<Rc<Domain>, ModelError> {
        self.domains
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::UnknownType(name.to_string()))
    }

    pub fn schema(&self, name: &str) -> Option<&RecordSchema> {
        self.schemas.get(name).map(|schema| schema.as_ref())
    }

    pub fn variables(&self) -> &[RuntimeVariable] {
        &self.variables
    }

    pub(crate) fn variables_mut(&mut self) -> &mut [RuntimeVariable] {
        &mut self.variables
    }

    pub fn variable(&self, id: VariableId) -> &RuntimeVariable {
        &self.variables[id.0]
    }

    pub fn scalar_arrays(&self) -> &[ScalarArray] {
        &self.scalar_arrays
    }

    pub fn record_arrays(&self) -> &[RecordArray] {
        &self.record_arrays
    }

    pub fn scalar_array(&self, name: &str) -> Option<&ScalarArray> {
        self.scalar_arrays.iter().find(|array| array.name == name)
    }

    pub fn record_array(&self, name: &str) -> Option<&RecordArray> {
        self.record_arrays.iter().find(|array| array.name == name)
    }

    /// Number of assignments an exhaustive search visits, saturating.
    pub fn search_space(&self) -> u128 {
        self.variables.iter().fold(1u128, |space, variable| {
            space.saturating_mul(variable.domain.len() as u128)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn build(source: &str) -> Result<PuzzleModel, ModelError> {
        PuzzleModel::build(&parse(source).unwrap())
    }

    #[test]
    fn test_record_array_instances_and_peers() {
        let model = build(
            "\
Color = {red, green, blue}
Pet = {cat, dog}
House = [unique Color color, Pet pet]
var Houses : House[3]
",
        )
        .unwrap();

        assert_eq!(model.variables().len(), 6);
        let houses = model.record_array("Houses").unwrap();
        assert_eq!(houses.instances.len(), 3);

        let colors: Vec<VariableId> = houses
            .instances
            .iter()
            .map(|instance| instance.get("color").unwrap())
            .collect();
        assert_eq!(colors, vec![VariableId(0), VariableId(2), VariableId(4)]);
        assert_eq!(
            model.variable(colors[0]).peers(),
            &[VariableId(2), VariableId(4)]
        );
        assert_eq!(
            model.variable(colors[2]).peers(),
            &[VariableId(0), VariableId(2)]
        );

        let pet = houses.instances[1].get("pet").unwrap();
        assert!(model.variable(pet).peers().is_empty());
        assert_eq!(model.variable(pet).domain.name, "Pet");
    }

    #[test]
    fn test_scalars_are_enumerated_before_records() {
        let model = build(
            "\
Color = {red, blue}
Pair = [Color a, Color b]
var P : Pair[2]
var Favorite : Color[2]
",
        )
        .unwrap();

        let favorite = model.scalar_array("Favorite").unwrap();
        assert_eq!(favorite.variables, vec![VariableId(0), VariableId(1)]);
        let pairs = model.record_array("P").unwrap();
        assert_eq!(pairs.instances[0].get("a"), Some(VariableId(2)));
        assert_eq!(pairs.instances[1].get("b"), Some(VariableId(5)));
        assert_eq!(model.search_space(), 64);
    }

    #[test]
    fn test_size_one_record_has_no_peers() {
        let model = build("C = {x}\nR = [unique C f]\nvar Only : R\n").unwrap();
        assert_eq!(model.variables().len(), 1);
        assert!(model.variables()[0].peers().is_empty());
    }

    #[test]
    fn test_unknown_declaration_type() {
        let error = build("var Birds : Bird[6]\n").unwrap_err();
        assert_eq!(error, ModelError::UnknownType("Bird".to_string()));
    }

    #[test]
    fn test_unknown_entry_type() {
        let error = build("R = [Shade s]\nvar X : R[2]\n").unwrap_err();
        assert_eq!(error, ModelError::UnknownType("Shade".to_string()));
    }

    #[test]
    fn test_duplicate_variable() {
        let error = build("C = {x}\nvar A : C\nvar A : C[2]\n").unwrap_err();
        assert_eq!(error, ModelError::DuplicateVariable("A".to_string()));
    }

    #[test]
    fn test_schema_wins_over_domain_of_same_name() {
        let model = build("C = {x, y}\nT = {a}\nT = [C c]\nvar V : T[2]\n").unwrap();
        assert!(model.record_array("V").is_some());
        assert!(model.scalar_array("V").is_none());
        assert!(model.schema("T").is_some());
    }

    #[test]
    fn test_later_definition_replaces_earlier() {
        let model = build("C = {x}\nC = {x, y, z}\nvar V : C\n").unwrap();
        assert_eq!(model.variables()[0].domain.len(), 3);
    }
}
