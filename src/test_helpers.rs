// Ledger Assets Library: asset lifecycle transaction pipeline
// Written in 2020 by
//     Dr. Maxim Orlovsky <orlovsky@pandoracore.com>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the MIT License
// along with this software.
// If not, see <https://opensource.org/licenses/MIT>.

//! Test doubles for the auxiliary capabilities, recording every request they
//! receive. Scrub and supplement doubles share the `metas/` partition of the
//! ledger state; split doubles keep balances in the `splits/` partition.

use std::cell::RefCell;
use std::rc::Rc;

use strict_encoding::{strict_deserialize, strict_serialize};

use crate::asset::{Asset, AssetId, AssetMapper, AssetQuery, ASSET_STORE_PREFIX};
use crate::auxiliary::{
    authenticate, conform, maintain, scrub, split, supplement, verify, Auxiliary,
    AuxiliaryResponse, Capability,
};
use crate::ledger::{Context, Height, KvStore, MemoryStore};
use crate::property::{Data, DataHash, MetaProperties, MetaProperty, PropertyList};
use crate::transactions::{TransactionKeeper, TransactionResponse};
use crate::Error;

pub const METAS_PREFIX: &[u8] = b"metas/";
pub const SPLITS_PREFIX: &[u8] = b"splits/";

/// Checks that the response failed with the given error
macro_rules! assert_failure {
    ($response:expr, $err:expr) => {
        let response = $response;
        assert!(!response.is_successful(), "transaction unexpectedly succeeded");
        assert_eq!(response.error(), Some(&$err));
    };
}

/// Request log plus an optional failure which is returned for every request
/// starting from the given call number (counted from 1)
pub struct Recorder<R> {
    calls: RefCell<Vec<R>>,
    failure: RefCell<Option<(usize, Error)>>,
}

impl<R> Recorder<R>
where
    R: Clone,
{
    pub fn new() -> Rc<Self> {
        Rc::new(Recorder {
            calls: RefCell::new(vec![]),
            failure: RefCell::new(None),
        })
    }

    pub fn fail_with(&self, err: Error) {
        self.fail_from(1, err);
    }

    /// Lets the first `call - 1` requests pass and fails all the following
    pub fn fail_from(&self, call: usize, err: Error) {
        *self.failure.borrow_mut() = Some((call, err));
    }

    pub fn calls(&self) -> Vec<R> {
        self.calls.borrow().clone()
    }

    fn record(&self, request: &R) -> Result<(), Error> {
        self.calls.borrow_mut().push(request.clone());
        let call = self.calls.borrow().len();
        match &*self.failure.borrow() {
            Some((from, err)) if call >= *from => Err(err.clone()),
            _ => Ok(()),
        }
    }
}

impl<R> Auxiliary for Recorder<R>
where
    R: Clone,
{
    type Request = R;
    type Payload = ();

    fn help(&self, _: &mut Context<'_>, request: R) -> AuxiliaryResponse<()> {
        self.record(&request).into()
    }
}

fn meta_key(hash: DataHash) -> Vec<u8> {
    let mut key = METAS_PREFIX.to_vec();
    key.extend(&hash.to_byte_array());
    key
}

/// Conceals meta-properties saving revealed data under `metas/<hash>`
pub struct ScrubDouble(Rc<Recorder<scrub::Request>>);

impl Auxiliary for ScrubDouble {
    type Request = scrub::Request;
    type Payload = PropertyList;

    fn help(
        &self,
        context: &mut Context<'_>,
        request: scrub::Request,
    ) -> AuxiliaryResponse<PropertyList> {
        if let Err(err) = self.0.record(&request) {
            return err.into();
        }
        let mut scrubbed = PropertyList::new();
        for meta in &request.meta_properties {
            let property = meta.scrub();
            match strict_serialize(meta.data()) {
                Ok(data) => context.store_mut().set(meta_key(meta.data().conceal()), data),
                Err(err) => return Error::from(err).into(),
            }
            scrubbed.add(property);
        }
        AuxiliaryResponse::Success(scrubbed)
    }
}

/// Reveals confidential properties known to the `metas/` partition; revealed
/// properties are passed through
pub struct SupplementDouble(Rc<Recorder<supplement::Request>>);

impl Auxiliary for SupplementDouble {
    type Request = supplement::Request;
    type Payload = MetaProperties;

    fn help(
        &self,
        context: &mut Context<'_>,
        request: supplement::Request,
    ) -> AuxiliaryResponse<MetaProperties> {
        if let Err(err) = self.0.record(&request) {
            return err.into();
        }
        let mut metas = MetaProperties::new();
        for property in &request.properties {
            if !property.is_confidential() {
                metas.add(MetaProperty::new(property.id().clone(), property.data().clone()));
                continue;
            }
            if let Some(value) = context.store().get(&meta_key(property.data().conceal())) {
                match strict_deserialize::<Data>(&value) {
                    Ok(data) => metas.add(MetaProperty::new(property.id().clone(), data)),
                    Err(err) => return Error::from(err).into(),
                }
            }
        }
        AuxiliaryResponse::Success(metas)
    }
}

/// Writes (on mint) or deletes (on burn) `splits/<owner>/<asset id>` records
pub struct SplitDouble {
    recorder: Rc<Recorder<split::Request>>,
    minting: bool,
}

impl Auxiliary for SplitDouble {
    type Request = split::Request;
    type Payload = ();

    fn help(&self, context: &mut Context<'_>, request: split::Request) -> AuxiliaryResponse<()> {
        if let Err(err) = self.recorder.record(&request) {
            return err.into();
        }
        let mut key = SPLITS_PREFIX.to_vec();
        key.extend(format!("{}/{}", request.owner_id, request.asset_id).into_bytes());
        if self.minting {
            context.store_mut().set(key, request.value.to_string().into_bytes());
        } else {
            context.store_mut().delete(&key);
        }
        AuxiliaryResponse::Success(())
    }
}

/// Full set of recording doubles
pub struct Fixture {
    pub authenticate: Rc<Recorder<authenticate::Request>>,
    pub verify: Rc<Recorder<verify::Request>>,
    pub conform: Rc<Recorder<conform::Request>>,
    pub scrub: Rc<Recorder<scrub::Request>>,
    pub supplement: Rc<Recorder<supplement::Request>>,
    pub mint: Rc<Recorder<split::Request>>,
    pub burn: Rc<Recorder<split::Request>>,
    pub maintain: Rc<Recorder<maintain::Request>>,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            authenticate: Recorder::new(),
            verify: Recorder::new(),
            conform: Recorder::new(),
            scrub: Recorder::new(),
            supplement: Recorder::new(),
            mint: Recorder::new(),
            burn: Recorder::new(),
            maintain: Recorder::new(),
        }
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        vec![
            Capability::Authenticate(self.authenticate.clone()),
            Capability::Verify(self.verify.clone()),
            Capability::Conform(self.conform.clone()),
            Capability::Scrub(Rc::new(ScrubDouble(self.scrub.clone()))),
            Capability::Supplement(Rc::new(SupplementDouble(self.supplement.clone()))),
            Capability::Mint(Rc::new(SplitDouble {
                recorder: self.mint.clone(),
                minting: true,
            })),
            Capability::Burn(Rc::new(SplitDouble {
                recorder: self.burn.clone(),
                minting: false,
            })),
            Capability::Maintain(self.maintain.clone()),
        ]
    }

    /// Capabilities without the one with the given name
    pub fn capabilities_without(&self, name: &str) -> Vec<Capability> {
        self.capabilities()
            .into_iter()
            .filter(|capability| capability.name() != name)
            .collect()
    }
}

pub fn assets_snapshot(store: &MemoryStore) -> Vec<(Vec<u8>, Vec<u8>)> {
    store.scan(ASSET_STORE_PREFIX)
}

pub fn splits_snapshot(store: &MemoryStore) -> Vec<(Vec<u8>, Vec<u8>)> {
    store.scan(SPLITS_PREFIX)
}

/// Runs the transaction at the given block height
pub fn transact<K>(
    keeper: &K,
    store: &mut MemoryStore,
    height: i64,
    message: K::Message,
) -> TransactionResponse
where
    K: TransactionKeeper,
{
    let mut context = Context::new(Height::new(height), store);
    keeper.transact(&mut context, message)
}

pub fn fetch_asset(store: &mut MemoryStore, asset_id: AssetId) -> Option<Asset> {
    let mut context = Context::new(Height::new(0), store);
    AssetQuery::new(AssetMapper::default())
        .enquire(&mut context, asset_id)
        .ok()
}
