//! Pairing of split (`partial`) method declarations.
//!
//! A partial method is declared once without a body (the defining half)
//! and once with one (the implementing half), possibly in another file.
//! Halves match on containing type, name, type-parameter count and
//! parameter signature.

use resgen_ir::ast::{Modifiers, RefKind};
use resgen_ir::StringInterner;
use resgen_types::{TypeId, TypeResolver};
use rustc_hash::FxHashMap;

use crate::collect::MethodSite;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct SignatureKey {
    containing: Option<TypeId>,
    name: String,
    arity: usize,
    params: Vec<(RefKind, String)>,
}

impl SignatureKey {
    fn of(site: &MethodSite<'_>, resolver: &dyn TypeResolver, interner: &StringInterner) -> Self {
        let params = site
            .method
            .params
            .iter()
            .map(|param| {
                let ty = resolver.resolve(&param.ty, &site.scope).map_or_else(
                    || param.ty.span.text(site.source).to_owned(),
                    |ty| ty.display().to_owned(),
                );
                (param.ref_kind, ty)
            })
            .collect();
        SignatureKey {
            containing: site.scope.containing_type(),
            name: site.name(interner).to_owned(),
            arity: site.method.type_params.len(),
            params,
        }
    }
}

/// Defining and implementing halves, by index into the site list.
#[derive(Debug, Default)]
pub(crate) struct PartialPairs {
    partner: FxHashMap<usize, usize>,
}

impl PartialPairs {
    pub fn build(
        sites: &[MethodSite<'_>],
        resolver: &dyn TypeResolver,
        interner: &StringInterner,
    ) -> Self {
        let mut halves: FxHashMap<SignatureKey, (Option<usize>, Option<usize>)> =
            FxHashMap::default();
        for (index, site) in sites.iter().enumerate() {
            if !site.member.modifiers.contains(Modifiers::PARTIAL) {
                continue;
            }
            let entry = halves
                .entry(SignatureKey::of(site, resolver, interner))
                .or_default();
            let slot = if site.method.body.is_none() {
                &mut entry.0
            } else {
                &mut entry.1
            };
            slot.get_or_insert(index);
        }

        let mut partner = FxHashMap::default();
        for (defining, implementing) in halves.into_values() {
            if let (Some(defining), Some(implementing)) = (defining, implementing) {
                partner.insert(defining, implementing);
                partner.insert(implementing, defining);
            }
        }
        tracing::debug!(pairs = partner.len() / 2, "paired partial methods");
        PartialPairs { partner }
    }

    /// The other half of the method at `index`.
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partner.get(&index).copied()
    }
}
