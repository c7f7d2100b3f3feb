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

use rust_decimal::Decimal;

use super::{check_address, check_id, check_meta_properties, check_properties};
use super::{TransactionKeeper, TransactionResponse};
use crate::asset::{Asset, AssetId, AssetMapper};
use crate::auxiliary::authenticate::{self, Authenticator};
use crate::auxiliary::conform::{self, Conformer};
use crate::auxiliary::scrub::{self, Scrubber};
use crate::auxiliary::split::{self, SplitMinter};
use crate::auxiliary::verify::{self, Verifier};
use crate::auxiliary::{Capability, Slot};
use crate::config::Parameters;
use crate::ledger::{Address, Context};
use crate::property::{Id, MetaProperties, PropertyList};
use crate::{Error, InitError};

/// Request to create a new asset
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MintMessage {
    /// Ledger address which signed the transaction
    pub from: Address,
    /// Identity acting as the classification maintainer
    pub from_id: Id,
    /// Identity receiving the ownership split
    pub to_id: Id,
    pub classification_id: Id,
    pub immutable_meta_properties: MetaProperties,
    pub immutable_properties: PropertyList,
    pub mutable_meta_properties: MetaProperties,
    pub mutable_properties: PropertyList,
}

impl MintMessage {
    /// Performs stateless checks of the message
    pub fn validate(&self) -> Result<(), Error> {
        check_address("from", &self.from)?;
        check_id("from_id", &self.from_id)?;
        check_id("to_id", &self.to_id)?;
        check_id("classification_id", &self.classification_id)?;
        check_meta_properties("immutable_meta_properties", &self.immutable_meta_properties)?;
        check_properties("immutable_properties", &self.immutable_properties)?;
        check_meta_properties("mutable_meta_properties", &self.mutable_meta_properties)?;
        check_properties("mutable_properties", &self.mutable_properties)
    }

    /// Ownership split locked by the `lock` meta-property. Immutable
    /// meta-properties are looked up first.
    pub fn lock(&self) -> Result<Option<Decimal>, Error> {
        self.immutable_meta_properties
            .iter()
            .chain(&self.mutable_meta_properties)
            .cloned()
            .collect::<MetaProperties>()
            .lock()
    }
}

/// Keeper of the asset mint pipeline
pub struct MintKeeper {
    mapper: AssetMapper,
    parameters: Parameters,
    verify: Verifier,
    authenticate: Authenticator,
    scrub: Scrubber,
    conform: Conformer,
    mint: SplitMinter,
}

impl MintKeeper {
    /// Wires the keeper from the capability list. All of `verify`,
    /// `authenticate`, `scrub`, `conform` and `mint` must be present exactly
    /// once; other capabilities are ignored.
    pub fn initialize(
        mapper: AssetMapper,
        parameters: Parameters,
        capabilities: &[Capability],
    ) -> Result<Self, InitError> {
        let mut verify = Slot::new(verify::NAME);
        let mut authenticate = Slot::new(authenticate::NAME);
        let mut scrub = Slot::new(scrub::NAME);
        let mut conform = Slot::new(conform::NAME);
        let mut mint = Slot::new(split::MINT_NAME);
        for capability in capabilities {
            match capability {
                Capability::Verify(aux) => verify.assign(aux.clone())?,
                Capability::Authenticate(aux) => authenticate.assign(aux.clone())?,
                Capability::Scrub(aux) => scrub.assign(aux.clone())?,
                Capability::Conform(aux) => conform.assign(aux.clone())?,
                Capability::Mint(aux) => mint.assign(aux.clone())?,
                unused => trace!("Mint keeper ignores `{}` auxiliary", unused.name()),
            }
        }
        Ok(MintKeeper {
            mapper,
            parameters,
            verify: verify.require()?,
            authenticate: authenticate.require()?,
            scrub: scrub.require()?,
            conform: conform.require()?,
            mint: mint.require()?,
        })
    }

    fn scrub_merge(
        &self,
        context: &mut Context<'_>,
        meta_properties: MetaProperties,
        properties: PropertyList,
    ) -> Result<PropertyList, Error> {
        let mut merged = self
            .scrub
            .help(context, scrub::Request::new(meta_properties))
            .into_result()?;
        merged.extend(properties);
        Ok(merged)
    }

    fn mint(&self, context: &mut Context<'_>, message: MintMessage) -> Result<AssetId, Error> {
        if !self.parameters.mint_enabled {
            debug!("Minting is disabled by module parameters");
            return Err(Error::NotAuthorized);
        }
        message.validate()?;
        let lock = message.lock();
        let MintMessage {
            from,
            from_id,
            to_id,
            classification_id,
            immutable_meta_properties,
            immutable_properties,
            mutable_meta_properties,
            mutable_properties,
        } = message;

        self.verify
            .help(context, verify::Request::new(classification_id.clone(), from_id.clone()))
            .into_result()?;
        trace!("{} is a maintainer of {}", from_id, classification_id);

        self.authenticate
            .help(context, authenticate::Request::new(from, from_id))
            .into_result()?;

        let immutable_properties =
            self.scrub_merge(context, immutable_meta_properties, immutable_properties)?;
        let asset_id = AssetId::derive(&classification_id, &immutable_properties);
        trace!("Derived asset id {}", asset_id);

        if self
            .mapper
            .new_collection(context)
            .fetch(&asset_id)?
            .get(&asset_id)
            .is_some()
        {
            return Err(Error::EntityAlreadyExists);
        }

        let mutable_properties =
            self.scrub_merge(context, mutable_meta_properties, mutable_properties)?;

        self.conform
            .help(
                context,
                conform::Request::new(
                    classification_id,
                    immutable_properties.clone(),
                    mutable_properties.clone(),
                ),
            )
            .into_result()?;

        let value = lock?.unwrap_or_default();
        self.mint
            .help(context, split::Request::new(to_id, asset_id, value))
            .into_result()?;
        trace!("Split {} of {} allocated", value, asset_id);

        self.mapper.new_collection(context).add(Asset::new(
            asset_id,
            immutable_properties,
            mutable_properties,
        ))?;
        Ok(asset_id)
    }
}

impl TransactionKeeper for MintKeeper {
    type Message = MintMessage;

    fn transact(&self, context: &mut Context<'_>, message: MintMessage) -> TransactionResponse {
        match self.mint(context, message) {
            Ok(asset_id) => {
                debug!("Asset {} minted at height {}", asset_id, context.block_height());
                TransactionResponse::Success
            }
            Err(err) => {
                debug!("Mint rejected: {}", err);
                TransactionResponse::Failure(err)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;
    use crate::auxiliary::{maintain, supplement};
    use crate::ledger::{Height, MemoryStore};
    use crate::property::{Data, MetaProperty, Property};
    use crate::test_helpers::*;

    fn message() -> MintMessage {
        MintMessage {
            from: Address::from("acc1signer"),
            from_id: Id::new("maintainer"),
            to_id: Id::new("owner"),
            classification_id: Id::new("cls1"),
            immutable_meta_properties: MetaProperties::new(),
            immutable_properties: vec![Property::new("name", "gold-bar-1")].into(),
            mutable_meta_properties: MetaProperties::new(),
            mutable_properties: PropertyList::new(),
        }
    }

    fn asset_id(message: &MintMessage) -> AssetId {
        AssetId::derive(&message.classification_id, &message.immutable_properties)
    }

    fn keeper(fixture: &Fixture) -> MintKeeper {
        MintKeeper::initialize(
            AssetMapper::default(),
            Parameters::default(),
            &fixture.capabilities(),
        )
        .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_mint_success() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        assert!(transact(&keeper, &mut store, 10, message()).is_successful());

        let asset = fetch_asset(&mut store, asset_id(&message())).unwrap();
        assert_eq!(asset.id(), asset_id(&message()));
        assert_eq!(asset.immutable_properties(), &message().immutable_properties);
        assert!(asset.mutable_properties().is_empty());
        assert_eq!(assets_snapshot(&store).len(), 1);

        assert_eq!(fixture.verify.calls(), vec![verify::Request::new(
            Id::new("cls1"),
            Id::new("maintainer")
        )]);
        assert_eq!(fixture.authenticate.calls(), vec![authenticate::Request::new(
            Address::from("acc1signer"),
            Id::new("maintainer")
        )]);
        assert_eq!(fixture.conform.calls(), vec![conform::Request::new(
            Id::new("cls1"),
            message().immutable_properties,
            PropertyList::new()
        )]);
        assert_eq!(fixture.mint.calls(), vec![split::Request::new(
            Id::new("owner"),
            asset_id(&message()),
            Decimal::ZERO
        )]);
        assert!(fixture.burn.calls().is_empty());
        assert!(fixture.supplement.calls().is_empty());
    }

    #[test]
    fn test_mint_duplicate() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        assert!(transact(&keeper, &mut store, 10, message()).is_successful());
        let snapshot = store.clone();
        assert_failure!(
            transact(&keeper, &mut store, 11, message()),
            Error::EntityAlreadyExists
        );
        assert_eq!(assets_snapshot(&store), assets_snapshot(&snapshot));
        assert_eq!(assets_snapshot(&store).len(), 1);
        assert_eq!(fixture.mint.calls().len(), 1);
        assert_eq!(fixture.conform.calls().len(), 1);
    }

    #[test]
    fn test_mint_duplicate_reordered_properties() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        let mut first = message();
        first.immutable_properties = vec![
            Property::new("name", "gold-bar-1"),
            Property::new("purity", dec("0.9999")),
        ]
        .into();
        let mut second = first.clone();
        second.immutable_properties = first.immutable_properties.clone().into_iter().rev().collect();

        assert!(transact(&keeper, &mut store, 10, first).is_successful());
        assert_failure!(
            transact(&keeper, &mut store, 10, second),
            Error::EntityAlreadyExists
        );
    }

    #[test]
    fn test_mint_distinct_assets() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        let mut other = message();
        other.immutable_properties = vec![Property::new("name", "gold-bar-2")].into();
        assert!(transact(&keeper, &mut store, 10, message()).is_successful());
        assert!(transact(&keeper, &mut store, 10, other).is_successful());
        assert_eq!(assets_snapshot(&store).len(), 2);
    }

    #[test]
    fn test_mint_locked() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        let mut msg = message();
        msg.immutable_meta_properties = vec![MetaProperty::new("lock", dec("0.25"))].into();
        assert!(transact(&keeper, &mut store, 10, msg.clone()).is_successful());

        let calls = fixture.mint.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].value, dec("0.25"));
        assert_eq!(calls[0].owner_id, Id::new("owner"));

        let mut immutable = PropertyList::new();
        immutable.add(MetaProperty::new("lock", dec("0.25")).scrub());
        immutable.extend(msg.immutable_properties.clone());
        let asset = fetch_asset(&mut store, AssetId::derive(&Id::new("cls1"), &immutable)).unwrap();
        assert_eq!(calls[0].asset_id, asset.id());
        let lock = asset.lock().unwrap();
        assert!(lock.is_confidential());
        assert_eq!(lock.data(), &Data::Confidential(Data::Dec(dec("0.25")).conceal()));
        assert!(!splits_snapshot(&store).is_empty());
    }

    #[test]
    fn test_mint_lock_resolution() {
        let mut msg = message();
        assert_eq!(msg.lock(), Ok(None));

        msg.mutable_meta_properties = vec![MetaProperty::new("lock", dec("0.5"))].into();
        assert_eq!(msg.lock(), Ok(Some(dec("0.5"))));

        msg.immutable_meta_properties = vec![MetaProperty::new("lock", dec("0.25"))].into();
        assert_eq!(msg.lock(), Ok(Some(dec("0.25"))));

        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();
        assert!(transact(&keeper, &mut store, 10, msg).is_successful());
        assert_eq!(fixture.mint.calls()[0].value, dec("0.25"));
        // Mutable meta-properties are scrubbed into the mutable property set
        assert_eq!(fixture.scrub.calls().len(), 2);
        assert_eq!(fixture.conform.calls()[0].mutable_properties.len(), 1);
    }

    #[test]
    fn test_mint_lock_wrong_format() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        let mut msg = message();
        msg.mutable_meta_properties = vec![MetaProperty::new("lock", "a quarter")].into();
        let response = transact(&keeper, &mut store, 10, msg);
        assert!(matches!(response.error(), Some(Error::IncorrectFormat(_))));
        assert!(assets_snapshot(&store).is_empty());
        assert!(fixture.mint.calls().is_empty());
    }

    #[test]
    fn test_mint_repeated_lock() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        let mut msg = message();
        msg.immutable_meta_properties = vec![
            MetaProperty::new("lock", dec("0.25")),
            MetaProperty::new("lock", dec("0.75")),
        ]
        .into();
        let response = transact(&keeper, &mut store, 10, msg);
        assert!(matches!(response.error(), Some(Error::IncorrectMessage(_))));
        assert!(assets_snapshot(&store).is_empty());
        assert!(fixture.scrub.calls().is_empty());
        assert!(fixture.mint.calls().is_empty());
    }

    type Failure = Box<dyn Fn(&Fixture)>;

    #[test]
    fn test_mint_failure_points() {
        let failures: Vec<(&str, Failure)> = vec![
            (
                "verify",
                Box::new(|f: &Fixture| f.verify.fail_with(Error::NotAuthorized)) as Failure,
            ),
            (
                "authenticate",
                Box::new(|f: &Fixture| f.authenticate.fail_with(Error::NotAuthorized)) as Failure,
            ),
            (
                "scrub",
                Box::new(|f: &Fixture| {
                    f.scrub.fail_with(Error::ValidationFailed("scrub".to_owned()))
                }) as Failure,
            ),
            (
                "conform",
                Box::new(|f: &Fixture| {
                    f.conform.fail_with(Error::ValidationFailed("conform".to_owned()))
                }) as Failure,
            ),
            (
                "mint",
                Box::new(|f: &Fixture| {
                    f.mint.fail_with(Error::ValidationFailed("balance".to_owned()))
                }) as Failure,
            ),
        ];

        for (name, fail) in failures {
            let fixture = Fixture::new();
            let keeper = keeper(&fixture);
            let mut store = MemoryStore::new();
            let mut msg = message();
            msg.immutable_meta_properties = vec![MetaProperty::new("burn", Height::new(100))].into();

            fail(&fixture);
            let snapshot = store.clone();
            let response = transact(&keeper, &mut store, 10, msg);
            assert!(!response.is_successful(), "{} failure was ignored", name);
            assert!(
                matches!(
                    response.error(),
                    Some(Error::NotAuthorized) | Some(Error::ValidationFailed(_))
                ),
                "{} failure got replaced",
                name
            );
            assert_eq!(assets_snapshot(&store), assets_snapshot(&snapshot), "{}", name);
            assert!(splits_snapshot(&store).is_empty(), "{}", name);
        }
    }

    #[test]
    fn test_mint_mutable_scrub_failure() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();
        let mut msg = message();
        msg.mutable_meta_properties = vec![MetaProperty::new("burn", Height::new(100))].into();

        fixture
            .scrub
            .fail_from(2, Error::ValidationFailed("scrub".to_owned()));
        let snapshot = store.clone();
        let response = transact(&keeper, &mut store, 10, msg);
        assert_failure!(response, Error::ValidationFailed("scrub".to_owned()));
        assert_eq!(fixture.scrub.calls().len(), 2);
        assert!(fixture.conform.calls().is_empty());
        assert!(fixture.mint.calls().is_empty());
        assert_eq!(assets_snapshot(&store), assets_snapshot(&snapshot));
        assert!(splits_snapshot(&store).is_empty());
    }

    #[test]
    fn test_mint_short_circuits() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        fixture.verify.fail_with(Error::NotAuthorized);
        assert_failure!(transact(&keeper, &mut store, 10, message()), Error::NotAuthorized);
        assert_eq!(fixture.verify.calls().len(), 1);
        assert!(fixture.authenticate.calls().is_empty());
        assert!(fixture.scrub.calls().is_empty());
        assert_eq!(store, MemoryStore::new());

        let fixture = Fixture::new();
        let keeper = self::keeper(&fixture);
        fixture
            .conform
            .fail_with(Error::ValidationFailed("missing `weight`".to_owned()));
        assert_failure!(
            transact(&keeper, &mut store, 10, message()),
            Error::ValidationFailed("missing `weight`".to_owned())
        );
        assert_eq!(fixture.scrub.calls().len(), 2);
        assert!(fixture.mint.calls().is_empty());
        assert!(assets_snapshot(&store).is_empty());
    }

    #[test]
    fn test_mint_disabled() {
        let fixture = Fixture::new();
        let keeper = MintKeeper::initialize(
            AssetMapper::default(),
            Parameters {
                mint_enabled: false,
                burn_enabled: true,
            },
            &fixture.capabilities(),
        )
        .unwrap();
        let mut store = MemoryStore::new();
        assert_failure!(transact(&keeper, &mut store, 10, message()), Error::NotAuthorized);
        assert!(fixture.verify.calls().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_mint_incorrect_message() {
        let fixture = Fixture::new();
        let keeper = keeper(&fixture);
        let mut store = MemoryStore::new();

        let mut msg = message();
        msg.classification_id = Id::new("");
        let response = transact(&keeper, &mut store, 10, msg);
        assert!(matches!(response.error(), Some(Error::IncorrectMessage(_))));

        let mut msg = message();
        msg.immutable_meta_properties = vec![MetaProperty::new(
            "burn",
            Data::Confidential(Data::Height(Height::new(1)).conceal()),
        )]
        .into();
        assert!(matches!(msg.validate(), Err(Error::IncorrectMessage(_))));

        assert!(fixture.verify.calls().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_initialize_missing() {
        let fixture = Fixture::new();
        for name in &["verify", "authenticate", "scrub", "conform", "mint"] {
            let result = MintKeeper::initialize(
                AssetMapper::default(),
                Parameters::default(),
                &fixture.capabilities_without(name),
            );
            assert_eq!(result.err(), Some(InitError::UninitializedUsage(*name)));
        }
    }

    #[test]
    fn test_initialize_ignores_unused() {
        let fixture = Fixture::new();
        for name in &[supplement::NAME, split::BURN_NAME, maintain::NAME] {
            assert!(MintKeeper::initialize(
                AssetMapper::default(),
                Parameters::default(),
                &fixture.capabilities_without(name),
            )
            .is_ok());
        }
    }

    #[test]
    fn test_initialize_duplicate() {
        let fixture = Fixture::new();
        let mut capabilities = fixture.capabilities();
        capabilities.push(capabilities[2].clone());
        let result =
            MintKeeper::initialize(AssetMapper::default(), Parameters::default(), &capabilities);
        assert_eq!(result.err(), Some(InitError::DuplicateAuxiliary("conform")));
    }
}
