//! Cache de consultas de ofertas del lado del cliente.
//!
//! Las entradas se indexan por consulta lógica ([`QueryKey`]) y la
//! invalidación nunca es automática: el componente que ejecutó la mutación
//! la informa explícitamente con [`CacheOfertas::invalidar`] al confirmarse
//! el éxito, tal como el formulario web invalida sus queries al volver del
//! backend.

use std::collections::HashMap;

use crate::api::types::Oferta;

/// Consulta lógica que identifica una entrada del cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// Listado público completo.
    Todas,
    /// Ofertas del usuario indicado.
    MisAvisos(String),
    /// Una oferta por id.
    PorId(String),
    /// Una oferta por slug.
    PorSlug(String),
}

impl QueryKey {
    fn es_listado(&self) -> bool {
        matches!(self, QueryKey::Todas | QueryKey::MisAvisos(_))
    }
}

/// Valor cacheado: una oferta puntual o un listado.
#[derive(Debug, Clone)]
pub enum Cached {
    Oferta(Box<Oferta>),
    Listado(Vec<Oferta>),
}

/// Mutación confirmada por el backend, usada para decidir qué invalidar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutacion {
    /// Se creó una oferta: los listados quedaron viejos.
    Alta,
    /// Se editó la oferta indicada: listados y sus entradas puntuales.
    Edicion { id: String, slug: String },
    /// Se borró la oferta indicada.
    Baja { id: String },
}

#[derive(Debug, Default)]
pub struct CacheOfertas {
    entradas: HashMap<QueryKey, Cached>,
}

impl CacheOfertas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&Cached> {
        self.entradas.get(key)
    }

    pub fn put(&mut self, key: QueryKey, valor: Cached) {
        self.entradas.insert(key, valor);
    }

    pub fn len(&self) -> usize {
        self.entradas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entradas.is_empty()
    }

    /// Descarta las entradas afectadas por una mutación confirmada.
    pub fn invalidar(&mut self, mutacion: &Mutacion) {
        match mutacion {
            Mutacion::Alta => {
                self.entradas.retain(|key, _| !key.es_listado());
            }
            Mutacion::Edicion { id, slug } => {
                self.entradas.retain(|key, _| {
                    !key.es_listado()
                        && *key != QueryKey::PorId(id.clone())
                        && *key != QueryKey::PorSlug(slug.clone())
                });
            }
            Mutacion::Baja { id } => {
                // El borrado viene por id; las entradas por slug se filtran
                // mirando el id de la oferta cacheada.
                self.entradas.retain(|key, valor| {
                    if key.es_listado() || *key == QueryKey::PorId(id.clone()) {
                        return false;
                    }
                    match valor {
                        Cached::Oferta(oferta) => oferta.id != *id,
                        Cached::Listado(_) => true,
                    }
                });
            }
        }
    }
}
