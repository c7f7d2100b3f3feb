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

/// Defines BIP-340 style tagged SHA256 hash newtype together with its tag
/// type, hex display/parsing and strict encoding.
///
/// The tag engine is computed as `SHA256(tag) || SHA256(tag)` midstate, so
/// the resulting hash is `SHA256(SHA256(tag) || SHA256(tag) || msg)`.
macro_rules! tagged_hash {
    ($name:ident, $tag_name:ident, $tag:expr, doc = $doc:expr) => {
        #[doc = concat!("Tag for [`", stringify!($name), "`] hashes")]
        pub struct $tag_name;

        impl ::bitcoin_hashes::sha256t::Tag for $tag_name {
            fn engine() -> ::bitcoin_hashes::sha256::HashEngine {
                use ::bitcoin_hashes::{sha256, Hash, HashEngine};
                let tag_hash = sha256::Hash::hash($tag.as_bytes());
                let mut engine = sha256::Hash::engine();
                engine.input(&tag_hash[..]);
                engine.input(&tag_hash[..]);
                engine
            }
        }

        #[doc = $doc]
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub struct $name(::bitcoin_hashes::sha256t::Hash<$tag_name>);

        impl $name {
            /// Hashes the message committing to it under the type tag
            pub fn hash(msg: impl AsRef<[u8]>) -> Self {
                use ::bitcoin_hashes::Hash;
                $name(::bitcoin_hashes::sha256t::Hash::hash(msg.as_ref()))
            }

            /// Hashes strict-encoded representation of the data
            ///
            /// # Panics
            ///
            /// If the data can't be strict-encoded: any string or list
            /// inside it longer than `u16::MAX` items. Transaction messages
            /// passing `validate` are always within this limit.
            pub fn commit<T>(data: &T) -> Self
            where
                T: ::strict_encoding::StrictEncode,
            {
                use ::bitcoin_hashes::Hash;
                let mut engine = ::bitcoin_hashes::sha256t::Hash::<$tag_name>::engine();
                data.strict_encode(&mut engine)
                    .expect("committed data are bounded by message validation");
                $name(::bitcoin_hashes::sha256t::Hash::from_engine(engine))
            }

            /// Constructs hash from its raw byte representation
            pub fn from_byte_array(bytes: [u8; 32]) -> Self {
                use ::bitcoin_hashes::Hash;
                $name(::bitcoin_hashes::sha256t::Hash::from_inner(bytes))
            }

            /// Returns raw byte representation of the hash
            pub fn to_byte_array(&self) -> [u8; 32] {
                use ::bitcoin_hashes::Hash;
                self.0.into_inner()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use ::bitcoin_hashes::hex::ToHex;
                f.write_str(&self.to_byte_array()[..].to_hex())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::bitcoin_hashes::hex::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                use ::bitcoin_hashes::hex::FromHex;
                let bytes = Vec::<u8>::from_hex(s)?;
                if bytes.len() != 32 {
                    return Err(::bitcoin_hashes::hex::Error::InvalidLength(32, bytes.len()));
                }
                let mut inner = [0u8; 32];
                inner.copy_from_slice(&bytes);
                Ok($name::from_byte_array(inner))
            }
        }

        impl ::strict_encoding::StrictEncode for $name {
            fn strict_encode<E: ::std::io::Write>(
                &self,
                mut e: E,
            ) -> Result<usize, ::strict_encoding::Error> {
                e.write_all(&self.to_byte_array())?;
                Ok(32)
            }
        }

        impl ::strict_encoding::StrictDecode for $name {
            fn strict_decode<D: ::std::io::Read>(
                mut d: D,
            ) -> Result<Self, ::strict_encoding::Error> {
                let mut inner = [0u8; 32];
                d.read_exact(&mut inner)?;
                Ok($name::from_byte_array(inner))
            }
        }
    };
}
