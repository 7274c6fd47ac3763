//! Python bindings, exposing relvars and their normal-form queries.
//!
//! Dependencies cross the boundary as expression strings and attribute sets
//! as lists of names; everything is parsed and validated on the Rust side.

use crate::error::NormalizationError;
use crate::schema::{attribute_set, AttributeSet, Relvar};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: NormalizationError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_set(names: Vec<String>) -> PyResult<AttributeSet> {
    attribute_set(names).map_err(to_py_err)
}

fn to_names(set: AttributeSet) -> Vec<String> {
    set.into_iter().map(String::from).collect()
}

#[pyclass(name = "Relvar")]
#[derive(Debug)]
pub struct PyRelvar {
    inner: Relvar,
}

#[pymethods]
impl PyRelvar {
    #[new]
    #[pyo3(signature = (heading, functional_dependencies = Vec::new(), multivalued_dependencies = Vec::new()))]
    pub fn new(
        heading: Vec<String>,
        functional_dependencies: Vec<String>,
        multivalued_dependencies: Vec<String>,
    ) -> PyResult<Self> {
        let mut relvar = Self { inner: Relvar::new(to_set(heading)?) };
        for expression in functional_dependencies {
            relvar.add_functional_dependency(&expression)?;
        }
        for expression in multivalued_dependencies {
            relvar.add_multivalued_dependency(&expression)?;
        }
        Ok(relvar)
    }

    pub fn add_functional_dependency(&mut self, expression: &str) -> PyResult<()> {
        let fd = expression.parse().map_err(to_py_err)?;
        self.inner.add_functional_dependency(fd).map_err(to_py_err)
    }

    pub fn add_multivalued_dependency(&mut self, expression: &str) -> PyResult<()> {
        let mvd = expression.parse().map_err(to_py_err)?;
        self.inner.add_multivalued_dependency(mvd).map_err(to_py_err)
    }

    #[getter]
    pub fn heading(&self) -> Vec<String> {
        to_names(self.inner.heading().clone())
    }

    #[getter]
    pub fn functional_dependencies(&self) -> Vec<String> {
        self.inner.functional_dependencies().iter().map(|fd| fd.to_string()).collect()
    }

    #[getter]
    pub fn multivalued_dependencies(&self) -> Vec<String> {
        self.inner.multivalued_dependencies().iter().map(|mvd| mvd.to_string()).collect()
    }

    pub fn closure(&self, attributes: Vec<String>) -> PyResult<Vec<String>> {
        Ok(to_names(self.inner.closure(&to_set(attributes)?)))
    }

    pub fn is_superkey(&self, attributes: Vec<String>) -> PyResult<bool> {
        Ok(self.inner.is_superkey(&to_set(attributes)?))
    }

    pub fn is_key(&self, attributes: Vec<String>) -> PyResult<bool> {
        Ok(self.inner.is_key(&to_set(attributes)?))
    }

    pub fn candidate_keys(&self) -> Vec<Vec<String>> {
        self.inner.candidate_keys().into_iter().map(to_names).collect()
    }

    pub fn is_in_bcnf(&self) -> bool {
        self.inner.is_in_bcnf()
    }

    pub fn is_in_4nf(&self) -> bool {
        self.inner.is_in_4nf()
    }

    pub fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }

    #[staticmethod]
    pub fn from_json(json: &str) -> PyResult<Self> {
        Relvar::from_json(json).map(|inner| Self { inner }).map_err(to_py_err)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Relvar(heading={}, functional_dependencies={:?}, multivalued_dependencies={:?})",
            self.inner,
            self.functional_dependencies(),
            self.multivalued_dependencies()
        )
    }
}

/// Defines the `_normalization` Python module.
#[pymodule]
fn _normalization(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRelvar>()?;
    Ok(())
}
